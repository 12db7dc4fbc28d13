//! Configuration validation.
//!
//! Validates every engine key before an [`EngineConfig`] is built from it.
//!
//! [`EngineConfig`]: crate::domain::engine_config::EngineConfig

use crate::domain::engine_config::DEFAULT_MIN_SCORE;
use crate::domain::error::SignalError;
use crate::domain::strategy::{
    CrossoverParams, MeanReversionParams, MomentumParams, RsiParams, StrategyKind,
};
use crate::ports::config_port::{parse_bool, ConfigPort};

#[derive(Debug, Clone, Copy)]
enum ValueKind {
    Int,
    Float,
    Bool,
}

const INT_KEYS: &[(&str, &str)] = &[
    ("crossover", "short_period"),
    ("crossover", "long_period"),
    ("rsi", "period"),
    ("mean_reversion", "period"),
    ("momentum", "period"),
];

const FLOAT_KEYS: &[(&str, &str)] = &[
    ("crossover", "band_pct"),
    ("crossover", "confidence"),
    ("rsi", "oversold"),
    ("rsi", "overbought"),
    ("rsi", "strength_multiplier"),
    ("rsi", "confidence"),
    ("mean_reversion", "threshold_pct"),
    ("mean_reversion", "strength_multiplier"),
    ("mean_reversion", "confidence"),
    ("momentum", "threshold_pct"),
    ("momentum", "strength_multiplier"),
    ("momentum", "confidence"),
    ("aggregator", "min_score"),
];

pub fn validate_engine_config(config: &dyn ConfigPort) -> Result<(), SignalError> {
    validate_syntax(config)?;
    validate_crossover(config)?;
    validate_rsi(config)?;
    validate_mean_reversion(config)?;
    validate_momentum(config)?;
    validate_min_score(config)?;
    validate_enabled_strategies(config)?;
    Ok(())
}

/// Present keys must parse; numeric getters would otherwise fall back to
/// their defaults silently.
fn validate_syntax(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let typed = INT_KEYS
        .iter()
        .map(|&(section, key)| (section, key, ValueKind::Int))
        .chain(
            FLOAT_KEYS
                .iter()
                .map(|&(section, key)| (section, key, ValueKind::Float)),
        )
        .chain(
            StrategyKind::ALL
                .iter()
                .map(|kind| ("strategies", kind.config_key(), ValueKind::Bool)),
        );

    for (section, key, kind) in typed {
        let Some(raw) = config.get_string(section, key) else {
            continue;
        };
        let value = raw.trim();
        let (parses, expected) = match kind {
            ValueKind::Int => (value.parse::<i64>().is_ok(), "an integer"),
            ValueKind::Float => (value.parse::<f64>().is_ok(), "a number"),
            ValueKind::Bool => (parse_bool(value).is_some(), "a boolean"),
        };
        if !parses {
            return Err(SignalError::invalid(
                section,
                key,
                format!("{key} must be {expected}, got {raw:?}"),
            ));
        }
    }
    Ok(())
}

fn validate_period(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    default: usize,
) -> Result<i64, SignalError> {
    let value = config.get_int(section, key, default as i64);
    if value < 1 {
        return Err(SignalError::invalid(
            section,
            key,
            format!("{key} must be at least 1"),
        ));
    }
    Ok(value)
}

fn validate_non_negative(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
    default: f64,
) -> Result<f64, SignalError> {
    let value = config.get_double(section, key, default);
    if !(value >= 0.0) {
        return Err(SignalError::invalid(
            section,
            key,
            format!("{key} must be non-negative"),
        ));
    }
    Ok(value)
}

fn validate_confidence(
    config: &dyn ConfigPort,
    section: &str,
    default: f64,
) -> Result<(), SignalError> {
    let value = config.get_double(section, "confidence", default);
    if !(0.0..=1.0).contains(&value) {
        return Err(SignalError::invalid(
            section,
            "confidence",
            "confidence must be between 0 and 1",
        ));
    }
    Ok(())
}

fn validate_crossover(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let d = CrossoverParams::default();
    let short = validate_period(config, "crossover", "short_period", d.short_period)?;
    let long = validate_period(config, "crossover", "long_period", d.long_period)?;
    if short >= long {
        return Err(SignalError::invalid(
            "crossover",
            "short_period",
            "short_period must be less than long_period",
        ));
    }
    validate_non_negative(config, "crossover", "band_pct", d.band_pct)?;
    validate_confidence(config, "crossover", d.confidence)
}

fn validate_rsi(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let d = RsiParams::default();
    validate_period(config, "rsi", "period", d.period)?;
    let oversold = config.get_double("rsi", "oversold", d.oversold);
    let overbought = config.get_double("rsi", "overbought", d.overbought);
    for (key, value) in [("oversold", oversold), ("overbought", overbought)] {
        if !(0.0..=100.0).contains(&value) {
            return Err(SignalError::invalid(
                "rsi",
                key,
                format!("{key} must be between 0 and 100"),
            ));
        }
    }
    if oversold >= overbought {
        return Err(SignalError::invalid(
            "rsi",
            "oversold",
            "oversold must be below overbought",
        ));
    }
    validate_non_negative(config, "rsi", "strength_multiplier", d.strength_multiplier)?;
    validate_confidence(config, "rsi", d.confidence)
}

fn validate_mean_reversion(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let d = MeanReversionParams::default();
    validate_period(config, "mean_reversion", "period", d.period)?;
    validate_non_negative(config, "mean_reversion", "threshold_pct", d.threshold_pct)?;
    validate_non_negative(
        config,
        "mean_reversion",
        "strength_multiplier",
        d.strength_multiplier,
    )?;
    validate_confidence(config, "mean_reversion", d.confidence)
}

fn validate_momentum(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let d = MomentumParams::default();
    validate_period(config, "momentum", "period", d.period)?;
    validate_non_negative(config, "momentum", "threshold_pct", d.threshold_pct)?;
    validate_non_negative(config, "momentum", "strength_multiplier", d.strength_multiplier)?;
    validate_confidence(config, "momentum", d.confidence)
}

fn validate_min_score(config: &dyn ConfigPort) -> Result<(), SignalError> {
    validate_non_negative(config, "aggregator", "min_score", DEFAULT_MIN_SCORE)?;
    Ok(())
}

fn validate_enabled_strategies(config: &dyn ConfigPort) -> Result<(), SignalError> {
    let any_enabled = StrategyKind::ALL
        .iter()
        .any(|kind| config.get_bool("strategies", kind.config_key(), true));
    if !any_enabled {
        return Err(SignalError::invalid(
            "strategies",
            "*",
            "at least one strategy must be enabled",
        ));
    }
    Ok(())
}
