//! Domain error types.
//!
//! The signal engine itself is total and never fails; these errors come from
//! loading configuration and price data around it.

use crate::domain::universe::UniverseError;

/// Top-level error type for sigtrader.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no data for {code} on {exchange}")]
    NoData { code: String, exchange: String },

    #[error(transparent)]
    InvalidCodes(#[from] UniverseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl SignalError {
    pub(crate) fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        SignalError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&SignalError> for std::process::ExitCode {
    fn from(err: &SignalError) -> Self {
        let code: u8 = match err {
            SignalError::Io(_) => 1,
            SignalError::ConfigParse { .. }
            | SignalError::ConfigMissing { .. }
            | SignalError::ConfigInvalid { .. } => 2,
            SignalError::Data { .. } => 3,
            SignalError::InvalidCodes(_) => 4,
            SignalError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_invalid_message() {
        let err = SignalError::invalid("rsi", "period", "period must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid config value [rsi] period: period must be at least 1"
        );
    }

    #[test]
    fn no_data_message() {
        let err = SignalError::NoData {
            code: "BHP".into(),
            exchange: "ASX".into(),
        };
        assert_eq!(err.to_string(), "no data for BHP on ASX");
    }

    #[test]
    fn universe_error_is_transparent() {
        let err: SignalError = UniverseError::EmptyToken.into();
        assert_eq!(err.to_string(), "empty token in code list");
    }
}
