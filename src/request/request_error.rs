use crate::prelude::*;
use thiserror::Error as ThisError;

/// Errors building a [`crate::RequestDescriptor`].
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum RequestError {
    #[error("Failed to parse target URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Unsupported HTTP method '{method}'")]
    UnsupportedMethod { method: String },

    #[error("Request timeout must be greater than zero")]
    ZeroTimeout,
}
