//! Technical indicator implementations.
//!
//! Each indicator reduces a [`PriceSeries`] to a single scalar for the most
//! recent observation. Insufficient history yields a documented degenerate
//! value rather than an error:
//! - `SMA`, `EMA`: `0.0`, which callers must read as "undefined"
//! - `RSI`: the neutral `50.0`

pub mod sma;
pub mod ema;
pub mod rsi;

pub use ema::ema;
pub use rsi::{rsi, DEFAULT_RSI_PERIOD};
pub use sma::sma;

use crate::domain::price_series::PriceSeries;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndicatorType {
    Sma(usize),
    Ema(usize),
    Rsi(usize),
}

impl IndicatorType {
    pub fn compute(&self, series: &PriceSeries) -> f64 {
        let prices = series.as_slice();
        match *self {
            IndicatorType::Sma(period) => sma(prices, period),
            IndicatorType::Ema(period) => ema(prices, period),
            IndicatorType::Rsi(period) => rsi(prices, period),
        }
    }

    /// Fewest prices for which `compute` returns a real value. A zero period
    /// never does, so it reports `usize::MAX`.
    pub fn min_len(&self) -> usize {
        match *self {
            IndicatorType::Sma(0) | IndicatorType::Ema(0) | IndicatorType::Rsi(0) => usize::MAX,
            IndicatorType::Sma(period) | IndicatorType::Ema(period) => period,
            IndicatorType::Rsi(period) => period + 1,
        }
    }
}

impl fmt::Display for IndicatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorType::Sma(period) => write!(f, "SMA({})", period),
            IndicatorType::Ema(period) => write!(f, "EMA({})", period),
            IndicatorType::Rsi(period) => write!(f, "RSI({})", period),
        }
    }
}
