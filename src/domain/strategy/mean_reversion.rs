//! Mean reversion against the trailing SMA.

use crate::domain::indicator::sma;
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Action, Signal};

pub const NEUTRAL_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct MeanReversionParams {
    pub period: usize,
    pub threshold_pct: f64,
    pub strength_multiplier: f64,
    pub confidence: f64,
}

impl Default for MeanReversionParams {
    fn default() -> Self {
        Self {
            period: 20,
            threshold_pct: 5.0,
            strength_multiplier: 10.0,
            confidence: 0.65,
        }
    }
}

/// Buys when the last price sits more than `threshold_pct` below the mean,
/// sells when it sits that far above.
pub fn mean_reversion(series: &PriceSeries, params: &MeanReversionParams) -> Signal {
    let mean = sma(series.as_slice(), params.period);
    let last = match series.last() {
        Some(last) if mean > 0.0 => last,
        _ => return Signal::hold(NEUTRAL_CONFIDENCE, "Insufficient data for mean reversion"),
    };

    let deviation = (last - mean) / mean * 100.0;

    if deviation < -params.threshold_pct {
        Signal::new(
            Action::Buy,
            deviation.abs() * params.strength_multiplier,
            params.confidence,
            format!(
                "Price {:.1}% below {}-period mean",
                deviation.abs(),
                params.period
            ),
        )
    } else if deviation > params.threshold_pct {
        Signal::new(
            Action::Sell,
            deviation * params.strength_multiplier,
            params.confidence,
            format!("Price {:.1}% above {}-period mean", deviation, params.period),
        )
    } else {
        Signal::hold(NEUTRAL_CONFIDENCE, "Price near mean value")
    }
}
