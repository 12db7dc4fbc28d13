//! RSI (Relative Strength Index).
//!
//! Simple averages of gains and losses over the first `period` price changes
//! (prices[1..=period]); later prices are not consulted and no Wilder
//! smoothing is applied.
//!
//! Formula: RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! - fewer than `period + 1` prices: 50
//! - no movement at all in the window: 50
//! - avg_loss == 0 with gains: 100

pub const DEFAULT_RSI_PERIOD: usize = 14;

pub const NEUTRAL_RSI: f64 = 50.0;

pub fn rsi(prices: &[f64], period: usize) -> f64 {
    if period == 0 || prices.len() < period + 1 {
        return NEUTRAL_RSI;
    }

    let (gains, losses) = prices[..=period]
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold((0.0, 0.0), |(gains, losses), diff| {
            if diff > 0.0 {
                (gains + diff, losses)
            } else {
                (gains, losses - diff)
            }
        });

    let avg_gain = gains / period as f64;
    let avg_loss = losses / period as f64;

    if avg_loss == 0.0 {
        if avg_gain == 0.0 {
            return NEUTRAL_RSI;
        }
        return 100.0;
    }

    let rs = avg_gain / avg_loss;
    100.0 - (100.0 / (1.0 + rs))
}
