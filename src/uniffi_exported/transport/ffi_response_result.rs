use crate::prelude::*;

#[derive(Enum, Clone, Debug, PartialEq, Eq)]
pub enum FFIResponseResult {
    Success {
        value: FFIConnectionResponse,
    },
    Failure {
        kind: ErrorKind,
        diagnostic: Option<String>,
    },
    Cancelled,
}

impl From<ResponseResult> for FFIResponseResult {
    fn from(value: ResponseResult) -> Self {
        match value {
            ResponseResult::Success(response) => Self::Success {
                value: response.into(),
            },
            ResponseResult::Failure(failure) => Self::Failure {
                kind: failure.kind(),
                diagnostic: failure.diagnostic().map(str::to_owned),
            },
            ResponseResult::Cancelled => Self::Cancelled,
        }
    }
}
