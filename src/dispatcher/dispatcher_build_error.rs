use thiserror::Error as ThisError;

#[derive(Debug, PartialEq, Eq, Clone, ThisError)]
pub enum DispatcherBuildError {
    #[error("No tokio runtime handle given and not called from within a tokio runtime")]
    NoRuntime,
}
