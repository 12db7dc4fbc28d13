//! Simple Moving Average.
//!
//! Arithmetic mean of the trailing `period` prices.

/// Returns `0.0` when `prices.len() < period` or `period == 0`.
pub fn sma(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period {
        return 0.0;
    }
    let window = &prices[prices.len() - period..];
    window.iter().sum::<f64>() / period as f64
}
