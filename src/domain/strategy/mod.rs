//! Strategy evaluators.
//!
//! Four independent, stateless evaluators each map a [`PriceSeries`] to one
//! [`Signal`]. None of them fail: when history is too short for their
//! indicators they return a zero-strength hold.

pub mod crossover;
pub mod mean_reversion;
pub mod momentum;
pub mod rsi_strategy;

use crate::domain::engine_config::EngineConfig;
use crate::domain::price_series::PriceSeries;
use crate::domain::signal::Signal;
use std::fmt;

pub use crossover::{moving_average_crossover, CrossoverParams};
pub use mean_reversion::{mean_reversion, MeanReversionParams};
pub use momentum::{momentum, MomentumParams};
pub use rsi_strategy::{rsi_strategy, RsiParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    MovingAverageCrossover,
    Rsi,
    MeanReversion,
    Momentum,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::MovingAverageCrossover,
        StrategyKind::Rsi,
        StrategyKind::MeanReversion,
        StrategyKind::Momentum,
    ];

    /// Key under `[strategies]` that enables or disables this evaluator.
    pub fn config_key(&self) -> &'static str {
        match self {
            StrategyKind::MovingAverageCrossover => "moving_average",
            StrategyKind::Rsi => "rsi",
            StrategyKind::MeanReversion => "mean_reversion",
            StrategyKind::Momentum => "momentum",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::MovingAverageCrossover => write!(f, "MA Crossover"),
            StrategyKind::Rsi => write!(f, "RSI"),
            StrategyKind::MeanReversion => write!(f, "Mean Reversion"),
            StrategyKind::Momentum => write!(f, "Momentum"),
        }
    }
}

/// Run one evaluator with its parameters from `config`.
pub fn evaluate(kind: StrategyKind, series: &PriceSeries, config: &EngineConfig) -> Signal {
    let signal = match kind {
        StrategyKind::MovingAverageCrossover => moving_average_crossover(series, &config.crossover),
        StrategyKind::Rsi => rsi_strategy(series, &config.rsi),
        StrategyKind::MeanReversion => mean_reversion(series, &config.mean_reversion),
        StrategyKind::Momentum => momentum(series, &config.momentum),
    };
    tracing::debug!(
        strategy = %kind,
        action = %signal.action,
        strength = signal.strength,
        confidence = signal.confidence,
        "evaluated strategy"
    );
    signal
}
