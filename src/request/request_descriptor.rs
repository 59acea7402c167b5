use crate::prelude::*;
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An immutable description of one outbound HTTP(S) call, handed to a
/// [`ConnectionProvider`] by the [`Dispatcher`]. Payload-agnostic, the body
/// is opaque bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub(crate) id: RequestId,
    pub(crate) url: Url,
    pub(crate) method: HttpMethod,
    /// Lowercased header names, so keys are unique.
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
    pub(crate) timeout: Duration,
}

impl RequestDescriptor {
    pub fn builder(url: impl AsRef<str>) -> RequestDescriptorBuilder {
        RequestDescriptorBuilder::new(url)
    }

    pub fn id(&self) -> RequestId {
        self.id
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn header(&self, name: impl AsRef<str>) -> Option<&str> {
        self.headers
            .get(&name.as_ref().to_ascii_lowercase())
            .map(String::as_str)
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
