use crate::prelude::*;

/// Host supplied configuration, typically read from a JSON file bundled
/// with the application. Which [`ConnectionProvider`] is used is not part
/// of it, that is passed in code to [`DispatcherBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    pub dispatcher: DispatcherConfig,
    pub default_provider: DefaultProviderSettings,
}

impl TransportConfig {
    pub fn from_json_str(json: impl AsRef<str>) -> Result<Self, ConfigError> {
        serde_json::from_str(json.as_ref()).map_err(ConfigError::from)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        serde_json::to_string_pretty(self).map_err(ConfigError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        assert_eq!(
            TransportConfig::from_json_str("{}").unwrap(),
            TransportConfig::default()
        );
    }

    #[test]
    fn reads_nested_sections() {
        let config = TransportConfig::from_json_str(
            r#"{
                "dispatcher": { "max_timeout_ms": 10000 },
                "default_provider": { "user_agent": "fp-sdk/1.0", "connect_timeout_ms": 2500 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.dispatcher.max_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(
            config.default_provider.user_agent.as_deref(),
            Some("fp-sdk/1.0")
        );
        assert_eq!(
            config.default_provider.connect_timeout(),
            Some(Duration::from_millis(2500))
        );
    }

    #[test]
    fn writes_back_what_it_reads() {
        let config = TransportConfig {
            dispatcher: DispatcherConfig {
                max_timeout_ms: Some(750),
            },
            default_provider: DefaultProviderSettings::default(),
        };
        let json = config.to_json_string().unwrap();
        assert_eq!(TransportConfig::from_json_str(json).unwrap(), config);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            TransportConfig::from_json_str(r#"{ "dispatcher": 3 }"#),
            Err(ConfigError::MalformedJson(_))
        ));
    }
}
