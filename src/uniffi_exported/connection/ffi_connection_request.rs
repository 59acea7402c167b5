use crate::prelude::*;

/// An abstraction of a HTTP Network Request to be made FFI Side (Swift side),
/// e.g. by URLSession in Swift.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFIConnectionRequest {
    pub request_id: String,
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,

    /// Hard upper bound the host must honor, after which it should notify
    /// [`ConnectionError::TimedOut`].
    pub timeout_ms: u64,
}

impl From<&RequestDescriptor> for FFIConnectionRequest {
    fn from(value: &RequestDescriptor) -> Self {
        Self {
            request_id: value.id().to_string(),
            url: value.url().to_string(),
            method: value.method().to_string(),
            headers: value.headers().clone(),
            body: value.body().map(<[u8]>::to_vec),
            timeout_ms: u64::try_from(value.timeout().as_millis()).unwrap_or(u64::MAX),
        }
    }
}
