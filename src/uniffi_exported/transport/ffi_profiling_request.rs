use crate::prelude::*;

/// What the embedded caller on the FFI side wants sent.
#[derive(Record, Clone, Debug, PartialEq, Eq)]
pub struct FFIProfilingRequest {
    pub url: String,
    pub method: String,
    pub headers: HashMap<String, String>,
    pub body: Option<Vec<u8>>,

    /// Defaults to 30 seconds when `None`.
    pub timeout_ms: Option<u64>,
}

impl TryFrom<FFIProfilingRequest> for RequestDescriptor {
    type Error = RequestError;

    fn try_from(value: FFIProfilingRequest) -> Result<Self, Self::Error> {
        let mut builder = RequestDescriptor::builder(&value.url)
            .method(value.method.parse()?)
            .headers(value.headers);
        if let Some(body) = value.body {
            builder = builder.body(body);
        }
        if let Some(timeout_ms) = value.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        builder.build()
    }
}
