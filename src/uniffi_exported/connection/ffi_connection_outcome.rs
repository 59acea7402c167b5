use crate::prelude::*;

/// UniFFI does not allow us to pass `[Swift]Result` <-> `[Rust]Result`, so
/// this is what a [`FFIConnectionExecutor`] passes back to Rust land.
#[derive(Enum, Clone, Debug, PartialEq, Eq)]
pub enum FFIConnectionOutcome {
    Success { value: FFIConnectionResponse },
    Failure { error: ConnectionError },
}

impl From<FFIConnectionOutcome> for ConnectionOutcome {
    fn from(value: FFIConnectionOutcome) -> Self {
        match value {
            FFIConnectionOutcome::Success { value } => Ok(value.into()),
            FFIConnectionOutcome::Failure { error } => Err(error),
        }
    }
}
