//! Engine configuration.
//!
//! Every period, threshold and confidence used by the evaluators, the
//! aggregator's score threshold and the set of enabled strategies. The
//! defaults reproduce the stock engine exactly.

use crate::domain::config_validation::validate_engine_config;
use crate::domain::error::SignalError;
use crate::domain::strategy::{
    CrossoverParams, MeanReversionParams, MomentumParams, RsiParams, StrategyKind,
};
use crate::ports::config_port::ConfigPort;

/// Minimum weighted score before the aggregator leaves Hold.
///
/// Heuristic threshold with no statistical derivation; tune from data rather
/// than by hand.
pub const DEFAULT_MIN_SCORE: f64 = 50.0;

#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub crossover: CrossoverParams,
    pub rsi: RsiParams,
    pub mean_reversion: MeanReversionParams,
    pub momentum: MomentumParams,
    pub min_score: f64,
    /// Evaluated in [`StrategyKind::ALL`] order regardless of insertion order.
    pub enabled: Vec<StrategyKind>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            crossover: CrossoverParams::default(),
            rsi: RsiParams::default(),
            mean_reversion: MeanReversionParams::default(),
            momentum: MomentumParams::default(),
            min_score: DEFAULT_MIN_SCORE,
            enabled: StrategyKind::ALL.to_vec(),
        }
    }
}

impl EngineConfig {
    /// Validate then build from `[crossover]`, `[rsi]`, `[mean_reversion]`,
    /// `[momentum]`, `[aggregator]` and `[strategies]`. Missing keys fall back
    /// to the defaults.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, SignalError> {
        validate_engine_config(config)?;

        let d = EngineConfig::default();
        let period = |section: &str, default: usize| {
            config.get_int(section, "period", default as i64) as usize
        };

        let enabled = StrategyKind::ALL
            .into_iter()
            .filter(|kind| config.get_bool("strategies", kind.config_key(), true))
            .collect();

        Ok(EngineConfig {
            crossover: CrossoverParams {
                short_period: config
                    .get_int("crossover", "short_period", d.crossover.short_period as i64)
                    as usize,
                long_period: config
                    .get_int("crossover", "long_period", d.crossover.long_period as i64)
                    as usize,
                band_pct: config.get_double("crossover", "band_pct", d.crossover.band_pct),
                confidence: config.get_double("crossover", "confidence", d.crossover.confidence),
            },
            rsi: RsiParams {
                period: period("rsi", d.rsi.period),
                oversold: config.get_double("rsi", "oversold", d.rsi.oversold),
                overbought: config.get_double("rsi", "overbought", d.rsi.overbought),
                strength_multiplier: config.get_double(
                    "rsi",
                    "strength_multiplier",
                    d.rsi.strength_multiplier,
                ),
                confidence: config.get_double("rsi", "confidence", d.rsi.confidence),
            },
            mean_reversion: MeanReversionParams {
                period: period("mean_reversion", d.mean_reversion.period),
                threshold_pct: config.get_double(
                    "mean_reversion",
                    "threshold_pct",
                    d.mean_reversion.threshold_pct,
                ),
                strength_multiplier: config.get_double(
                    "mean_reversion",
                    "strength_multiplier",
                    d.mean_reversion.strength_multiplier,
                ),
                confidence: config.get_double(
                    "mean_reversion",
                    "confidence",
                    d.mean_reversion.confidence,
                ),
            },
            momentum: MomentumParams {
                period: period("momentum", d.momentum.period),
                threshold_pct: config.get_double(
                    "momentum",
                    "threshold_pct",
                    d.momentum.threshold_pct,
                ),
                strength_multiplier: config.get_double(
                    "momentum",
                    "strength_multiplier",
                    d.momentum.strength_multiplier,
                ),
                confidence: config.get_double("momentum", "confidence", d.momentum.confidence),
            },
            min_score: config.get_double("aggregator", "min_score", d.min_score),
            enabled,
        })
    }

    pub fn is_enabled(&self, kind: StrategyKind) -> bool {
        self.enabled.contains(&kind)
    }

    /// Longest history any enabled evaluator can use.
    pub fn required_history(&self) -> usize {
        self.enabled
            .iter()
            .map(|kind| match kind {
                StrategyKind::MovingAverageCrossover => {
                    self.crossover.short_period.max(self.crossover.long_period)
                }
                StrategyKind::Rsi => self.rsi.period + 1,
                StrategyKind::MeanReversion => self.mean_reversion.period,
                StrategyKind::Momentum => self.momentum.period,
            })
            .max()
            .unwrap_or(0)
    }
}
