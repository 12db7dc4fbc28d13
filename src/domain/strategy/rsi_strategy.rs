//! RSI oversold/overbought strategy.

use crate::domain::indicator::{rsi, DEFAULT_RSI_PERIOD};
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Action, Signal};

pub const NEUTRAL_CONFIDENCE: f64 = 0.4;

#[derive(Debug, Clone, PartialEq)]
pub struct RsiParams {
    pub period: usize,
    pub oversold: f64,
    pub overbought: f64,
    pub strength_multiplier: f64,
    pub confidence: f64,
}

impl Default for RsiParams {
    fn default() -> Self {
        Self {
            period: DEFAULT_RSI_PERIOD,
            oversold: 30.0,
            overbought: 70.0,
            strength_multiplier: 3.0,
            confidence: 0.75,
        }
    }
}

/// Buys below `oversold`, sells above `overbought`. Strength grows with the
/// distance past the threshold and is capped at 100.
pub fn rsi_strategy(series: &PriceSeries, params: &RsiParams) -> Signal {
    if series.len() < params.period + 1 {
        return Signal::hold(NEUTRAL_CONFIDENCE, "Insufficient data for RSI");
    }

    let value = rsi(series.as_slice(), params.period);

    if value < params.oversold {
        Signal::new(
            Action::Buy,
            (params.oversold - value) * params.strength_multiplier,
            params.confidence,
            format!("RSI ({:.1}) indicates oversold condition", value),
        )
    } else if value > params.overbought {
        Signal::new(
            Action::Sell,
            (value - params.overbought) * params.strength_multiplier,
            params.confidence,
            format!("RSI ({:.1}) indicates overbought condition", value),
        )
    } else {
        Signal::hold(
            NEUTRAL_CONFIDENCE,
            format!("RSI ({:.1}) in neutral zone", value),
        )
    }
}
