//! Port traits separating the engine from configuration and data sources.

pub mod config_port;
pub mod data_port;
