//! sigtrader — multi-indicator trading signal engine.
//!
//! Hexagonal architecture: the pure signal engine lives in [`domain`], port
//! traits in [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
pub mod logging;
