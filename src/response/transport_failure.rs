use crate::prelude::*;
use thiserror::Error as ThisError;

/// Why a call did not produce an [`HttpResponse`].
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
#[error("{kind}: {}", .diagnostic.as_deref().unwrap_or("no diagnostic"))]
pub struct TransportFailure {
    kind: ErrorKind,
    diagnostic: Option<String>,
}

impl TransportFailure {
    pub fn new(kind: ErrorKind, diagnostic: Option<String>) -> Self {
        Self { kind, diagnostic }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn diagnostic(&self) -> Option<&str> {
        self.diagnostic.as_deref()
    }
}
