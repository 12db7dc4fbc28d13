//! Immutable chronological price history.
//!
//! Oldest price first. No deduplication, gap detection or validation is
//! performed; insertion order is preserved exactly as supplied.

use crate::domain::ohlcv::OhlcvBar;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Arc<[f64]>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Self {
        Self {
            prices: prices.into(),
        }
    }

    /// Closing prices of `bars` in the order given.
    pub fn from_bars(bars: &[OhlcvBar]) -> Self {
        Self::new(bars.iter().map(|b| b.close).collect())
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Most recent price.
    pub fn last(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Price `n` observations back from the end, where `n == 1` is the last
    /// price. Mirrors `prices[len - n]`.
    pub fn back(&self, n: usize) -> Option<f64> {
        if n == 0 || n > self.prices.len() {
            return None;
        }
        Some(self.prices[self.prices.len() - n])
    }
}

impl From<Vec<f64>> for PriceSeries {
    fn from(prices: Vec<f64>) -> Self {
        Self::new(prices)
    }
}

impl From<&[f64]> for PriceSeries {
    fn from(prices: &[f64]) -> Self {
        Self {
            prices: prices.into(),
        }
    }
}
