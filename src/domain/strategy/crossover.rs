//! Moving-average crossover.
//!
//! Compares a short and a long SMA. A band of `band_pct` around the long
//! average is a dead zone so small wiggles do not flip the signal.

use crate::domain::indicator::sma;
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Action, Signal};

pub const NEUTRAL_CONFIDENCE: f64 = 0.3;

#[derive(Debug, Clone, PartialEq)]
pub struct CrossoverParams {
    pub short_period: usize,
    pub long_period: usize,
    pub band_pct: f64,
    pub confidence: f64,
}

impl Default for CrossoverParams {
    fn default() -> Self {
        Self {
            short_period: 10,
            long_period: 20,
            band_pct: 1.0,
            confidence: 0.7,
        }
    }
}

pub fn moving_average_crossover(series: &PriceSeries, params: &CrossoverParams) -> Signal {
    let prices = series.as_slice();
    let short_ma = sma(prices, params.short_period);
    let long_ma = sma(prices, params.long_period);

    // SMA reports 0 when undefined
    if short_ma <= 0.0 || long_ma <= 0.0 {
        return Signal::hold(NEUTRAL_CONFIDENCE, "Insufficient data for MA crossover");
    }

    let band = params.band_pct / 100.0;
    if short_ma > long_ma * (1.0 + band) {
        Signal::new(
            Action::Buy,
            (short_ma / long_ma - 1.0) * 100.0,
            params.confidence,
            format!(
                "Short MA ({:.2}) crossed above Long MA ({:.2})",
                short_ma, long_ma
            ),
        )
    } else if short_ma < long_ma * (1.0 - band) {
        Signal::new(
            Action::Sell,
            (long_ma / short_ma - 1.0) * 100.0,
            params.confidence,
            format!(
                "Short MA ({:.2}) crossed below Long MA ({:.2})",
                short_ma, long_ma
            ),
        )
    } else {
        Signal::hold(NEUTRAL_CONFIDENCE, "No clear MA crossover signal")
    }
}
