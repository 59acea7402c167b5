use crate::prelude::*;

/// An abstraction of a HTTP Network Response the FFI Side (Swift side)
/// completed a [`FFIConnectionRequest`] with.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFIConnectionResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,

    /// Can be empty.
    pub body: Vec<u8>,
}

impl From<FFIConnectionResponse> for HttpResponse {
    fn from(value: FFIConnectionResponse) -> Self {
        HttpResponse::new(value.status_code, value.headers, value.body)
    }
}

impl From<HttpResponse> for FFIConnectionResponse {
    fn from(value: HttpResponse) -> Self {
        Self {
            status_code: value.status_code,
            headers: value.headers,
            body: value.body,
        }
    }
}
