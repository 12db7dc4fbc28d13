//! Core domain types and the signal engine.
//!
//! Data flows one way: [`price_series`] feeds [`indicator`], indicators feed
//! the evaluators in [`strategy`], and [`aggregator`] reconciles their signals.

pub mod ohlcv;
pub mod price_series;
pub mod indicator;
pub mod signal;
pub mod strategy;
pub mod aggregator;
pub mod engine_config;
pub mod config_validation;
pub mod universe;
pub mod error;
