//! Rate-of-change momentum over a fixed lookback.

use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Action, Signal};

pub const NEUTRAL_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct MomentumParams {
    pub period: usize,
    pub threshold_pct: f64,
    pub strength_multiplier: f64,
    pub confidence: f64,
}

impl Default for MomentumParams {
    fn default() -> Self {
        Self {
            period: 10,
            threshold_pct: 5.0,
            strength_multiplier: 5.0,
            confidence: 0.7,
        }
    }
}

/// Percentage change from `prices[len - period]` to the last price.
///
/// Missing history is total absence of evidence, so it holds with zero
/// confidence rather than the neutral 0.3.
pub fn momentum(series: &PriceSeries, params: &MomentumParams) -> Signal {
    let (Some(base), Some(last)) = (series.back(params.period), series.last()) else {
        return Signal::hold(0.0, "Insufficient data");
    };
    if base <= 0.0 {
        return Signal::hold(0.0, "Insufficient data");
    }

    let change = (last - base) / base * 100.0;

    if change > params.threshold_pct {
        Signal::new(
            Action::Buy,
            change * params.strength_multiplier,
            params.confidence,
            format!("Strong upward momentum: {:.1}%", change),
        )
    } else if change < -params.threshold_pct {
        Signal::new(
            Action::Sell,
            change.abs() * params.strength_multiplier,
            params.confidence,
            format!("Strong downward momentum: {:.1}%", change),
        )
    } else {
        Signal::hold(NEUTRAL_CONFIDENCE, "Weak momentum")
    }
}
