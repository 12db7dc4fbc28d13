//! Exponential Moving Average.
//!
//! k = 2/(n+1), seeded with the first price, then
//! EMA = P[i]*k + EMA*(1-k) across the whole series.

/// Returns `0.0` when `prices.len() < period` or the series is empty.
pub fn ema(prices: &[f64], period: usize) -> f64 {
    let Some((&seed, rest)) = prices.split_first() else {
        return 0.0;
    };
    if prices.len() < period {
        return 0.0;
    }

    let k = 2.0 / (period as f64 + 1.0);
    rest.iter()
        .fold(seed, |ema, &price| price * k + ema * (1.0 - k))
}
