//! OHLCV bar representation.
//!
//! Bars are what data adapters produce. The engine only reads closes, see
//! [`PriceSeries::from_bars`](crate::domain::price_series::PriceSeries::from_bars).

use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct OhlcvBar {
    pub code: String,
    pub exchange: String,
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

impl OhlcvBar {
    /// (close - open) / open * 100, or 0 when open is not positive.
    pub fn change_pct(&self) -> f64 {
        if self.open > 0.0 {
            (self.close - self.open) / self.open * 100.0
        } else {
            0.0
        }
    }
}
