use crate::prelude::*;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatcherConfig {
    /// Upper bound applied to every request's own timeout.
    pub max_timeout_ms: Option<u64>,
}

impl DispatcherConfig {
    pub fn max_timeout(&self) -> Option<Duration> {
        self.max_timeout_ms.map(Duration::from_millis)
    }

    pub(crate) fn effective_timeout(&self, requested: Duration) -> Duration {
        self.max_timeout()
            .map_or(requested, |ceiling| requested.min(ceiling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_ceiling_request_timeout_is_kept() {
        let config = DispatcherConfig::default();
        assert_eq!(
            config.effective_timeout(Duration::from_secs(90)),
            Duration::from_secs(90)
        );
    }

    #[test]
    fn ceiling_clamps_longer_timeouts_only() {
        let config = DispatcherConfig {
            max_timeout_ms: Some(5_000),
        };
        assert_eq!(
            config.effective_timeout(Duration::from_secs(90)),
            Duration::from_secs(5)
        );
        assert_eq!(
            config.effective_timeout(Duration::from_secs(1)),
            Duration::from_secs(1)
        );
    }
}
