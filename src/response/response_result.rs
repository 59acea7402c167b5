use crate::prelude::*;
use enum_as_inner::EnumAsInner;

/// The single terminal outcome of a submitted [`RequestDescriptor`].
#[derive(Clone, Debug, PartialEq, Eq, EnumAsInner)]
pub enum ResponseResult {
    Success(HttpResponse),
    Failure(TransportFailure),
    Cancelled,
}

impl ResponseResult {
    pub(crate) fn timed_out(after: Duration) -> Self {
        Self::Failure(TransportFailure::new(
            ErrorKind::Timeout,
            Some(format!("no response within {after:?}")),
        ))
    }

    /// The failure kind, `None` for successes and cancellations.
    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.as_failure().map(TransportFailure::kind)
    }
}

impl From<Result<HttpResponse, ConnectionError>> for ResponseResult {
    fn from(value: Result<HttpResponse, ConnectionError>) -> Self {
        match value {
            Ok(response) => Self::Success(response),
            Err(error) => Self::Failure(error.into()),
        }
    }
}

impl From<DispatchError> for ResponseResult {
    fn from(value: DispatchError) -> Self {
        Self::Failure(value.into())
    }
}
