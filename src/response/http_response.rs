use crate::prelude::*;

/// A completed HTTP exchange as reported by a [`ConnectionProvider`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,

    /// Can be empty.
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status_code: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status_code,
            headers,
            body,
        }
    }

    pub fn with_status(status_code: u16) -> Self {
        Self {
            status_code,
            ..Default::default()
        }
    }
}
