//! Signal aggregation.
//!
//! Reconciles the per-strategy signals into one [`AggregateDecision`]:
//!
//! ```text
//! buy_score  = Σ strength × confidence over Buy signals
//! sell_score = Σ strength × confidence over Sell signals
//! ```
//!
//! Buy wins when `buy_score > sell_score` and `buy_score > min_score`; Sell
//! symmetrically; anything else holds. Strength is the winning score divided
//! by the number of strategies evaluated, and confidence is
//! `score / (buy_score + sell_score + 1)`, the `+ 1` damping the ratio and
//! keeping the denominator non-zero.

use crate::domain::engine_config::EngineConfig;
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::{Action, AggregateDecision, Signal};
use crate::domain::strategy::{self, StrategyKind};

pub const HOLD_CONFIDENCE: f64 = 0.2;

/// Per-strategy signals alongside their reconciled decision.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub signals: Vec<(StrategyKind, Signal)>,
    pub decision: AggregateDecision,
}

/// Evaluate every enabled strategy on `series` and combine the results.
pub fn analyze(series: &PriceSeries, config: &EngineConfig) -> Analysis {
    let signals: Vec<(StrategyKind, Signal)> = StrategyKind::ALL
        .into_iter()
        .filter(|kind| config.is_enabled(*kind))
        .map(|kind| (kind, strategy::evaluate(kind, series, config)))
        .collect();

    let decision = combine(signals.iter().map(|(_, s)| s), config.min_score);
    Analysis { signals, decision }
}

/// Combine `signals` into one decision using `min_score` as the threshold a
/// side's weighted score must exceed.
pub fn combine<'a, I>(signals: I, min_score: f64) -> AggregateDecision
where
    I: IntoIterator<Item = &'a Signal>,
{
    let mut total = 0usize;
    let mut buy_count = 0usize;
    let mut sell_count = 0usize;
    let mut buy_score = 0.0;
    let mut sell_score = 0.0;

    for signal in signals {
        total += 1;
        match signal.action {
            Action::Buy => {
                buy_count += 1;
                buy_score += signal.weighted_score();
            }
            Action::Sell => {
                sell_count += 1;
                sell_score += signal.weighted_score();
            }
            Action::Hold => {}
        }
    }

    tracing::debug!(buy_score, sell_score, total, "combining signals");

    if buy_score > sell_score && buy_score > min_score {
        AggregateDecision::new(
            Action::Buy,
            buy_score / total as f64,
            buy_score / (buy_score + sell_score + 1.0),
            format!("{}/{} strategies signal BUY", buy_count, total),
        )
    } else if sell_score > buy_score && sell_score > min_score {
        AggregateDecision::new(
            Action::Sell,
            sell_score / total as f64,
            sell_score / (buy_score + sell_score + 1.0),
            format!("{}/{} strategies signal SELL", sell_count, total),
        )
    } else {
        AggregateDecision::new(
            Action::Hold,
            0.0,
            HOLD_CONFIDENCE,
            "Mixed or weak signals from strategies",
        )
    }
}
