use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("Unable to JSON deserialize transport config: {0}")]
    MalformedJson(#[from] serde_json::Error),
}
