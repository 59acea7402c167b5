use crate::prelude::*;
use thiserror::Error as ThisError;

/// The category of a failed call, as observed by the embedded caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ThisError, Enum)]
pub enum ErrorKind {
    #[error("deadline elapsed before the connection provider responded")]
    Timeout,

    #[error("transport error")]
    TransportError,

    #[error("a call with the same request id is already in flight")]
    DuplicateRequest,
}

/// Errors raised by a [`ConnectionProvider`], i.e. by host code, be it Rust
/// or FFI side (Swift/Kotlin side), e.g. DNS, TLS or socket failures.
#[derive(Debug, PartialEq, Eq, Clone, ThisError, Error)]
pub enum ConnectionError {
    #[error("Failed to create URL from string: '{url}'")]
    InvalidUrl { url: String },

    #[error("Connection provider gave up waiting for a response")]
    TimedOut,

    #[error(
        "Request failed with code '{:?}', underlying error: '{:?}'",
        status_code,
        underlying
    )]
    RequestFailed {
        status_code: Option<u16>,
        underlying: Option<String>,
    },
}

impl From<uniffi::UnexpectedUniFFICallbackError> for ConnectionError {
    fn from(value: uniffi::UnexpectedUniFFICallbackError) -> Self {
        Self::RequestFailed {
            status_code: None,
            underlying: Some(value.reason),
        }
    }
}

/// Errors raised on our side of the provider boundary.
#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum DispatchError {
    #[error("Connection provider panicked while executing the request")]
    ProviderPanicked,

    #[error("Connection provider dropped the completion listener without notifying an outcome")]
    ListenerDroppedWithoutOutcome,

    #[error("Request id {id} is already in flight")]
    DuplicateRequest { id: RequestId },

    #[error("Dispatcher dropped the call before delivering a result")]
    DispatcherDropped,
}

impl From<ConnectionError> for TransportFailure {
    fn from(value: ConnectionError) -> Self {
        let kind = match value {
            ConnectionError::TimedOut => ErrorKind::Timeout,
            _ => ErrorKind::TransportError,
        };
        TransportFailure::new(kind, Some(value.to_string()))
    }
}

impl From<DispatchError> for TransportFailure {
    fn from(value: DispatchError) -> Self {
        let kind = match value {
            DispatchError::DuplicateRequest { .. } => ErrorKind::DuplicateRequest,
            _ => ErrorKind::TransportError,
        };
        TransportFailure::new(kind, Some(value.to_string()))
    }
}
