use crate::prelude::*;

/// Knobs for [`DefaultConnectionProvider`], all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultProviderSettings {
    pub user_agent: Option<String>,
    pub connect_timeout_ms: Option<u64>,

    /// Ignore proxies configured through the environment.
    pub no_proxy: bool,
}

impl DefaultProviderSettings {
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_ms.map(Duration::from_millis)
    }
}
