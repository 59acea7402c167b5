use crate::prelude::*;
use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum FFITransportSetupError {
    #[error("Invalid transport config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Failed to start async runtime: {reason}")]
    RuntimeUnavailable { reason: String },
}

impl From<ConfigError> for FFITransportSetupError {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfig {
            reason: value.to_string(),
        }
    }
}
