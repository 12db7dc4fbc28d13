//! Market data port trait.
//!
//! The engine never fetches prices itself; a `DataPort` supplies the bars a
//! [`PriceSeries`](crate::domain::price_series::PriceSeries) is built from.

use crate::domain::error::SignalError;
use crate::domain::ohlcv::OhlcvBar;
use chrono::NaiveDate;

pub trait DataPort {
    /// Bars for `code` within the inclusive date range, oldest first.
    fn fetch_ohlcv(
        &self,
        code: &str,
        exchange: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<OhlcvBar>, SignalError>;

    fn list_symbols(&self, exchange: &str) -> Result<Vec<String>, SignalError>;
}
