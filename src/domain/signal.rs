//! Signal records produced by evaluators and the aggregator.
//!
//! Strength is always within [0, 100] and confidence within [0, 1]; the
//! constructors clamp, and a NaN input collapses to 0.

use std::fmt;

pub const MAX_STRENGTH: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Buy => write!(f, "BUY"),
            Action::Sell => write!(f, "SELL"),
            Action::Hold => write!(f, "HOLD"),
        }
    }
}

fn bounded(value: f64, max: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}

/// One evaluator's recommendation.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal {
    pub action: Action,
    pub strength: f64,
    pub confidence: f64,
    pub reason: String,
}

impl Signal {
    pub fn new(action: Action, strength: f64, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            action,
            strength: bounded(strength, MAX_STRENGTH),
            confidence: bounded(confidence, 1.0),
            reason: reason.into(),
        }
    }

    /// A zero-strength hold.
    pub fn hold(confidence: f64, reason: impl Into<String>) -> Self {
        Self::new(Action::Hold, 0.0, confidence, reason)
    }

    /// Contribution to the aggregator's buy or sell score.
    pub fn weighted_score(&self) -> f64 {
        self.strength * self.confidence
    }
}

/// The reconciled recommendation across all evaluated strategies.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateDecision {
    pub action: Action,
    pub strength: f64,
    pub confidence: f64,
    pub reason: String,
}

impl AggregateDecision {
    pub fn new(action: Action, strength: f64, confidence: f64, reason: impl Into<String>) -> Self {
        Self {
            action,
            strength: bounded(strength, MAX_STRENGTH),
            confidence: bounded(confidence, 1.0),
            reason: reason.into(),
        }
    }
}
