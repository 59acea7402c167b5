use crate::prelude::*;

/// The Connection Provider as implemented FFI side (Swift/Kotlin side), e.g.
/// wrapping `[Swift]URLSession` with the app's own pinning or proxy setup.
#[uniffi::export(with_foreign)]
pub trait FFIConnectionExecutor: Send + Sync {
    /// Rust will tell the executor to make `request` by calling this
    /// function. Once the request has finished (Success/Failure) it passes
    /// back the outcome using the `listener_rust_side` callback.
    fn execute_connection_request(
        &self,
        request: FFIConnectionRequest,
        listener_rust_side: Arc<FFIConnectionOutcomeListener>,
    ) -> Result<(), ConnectionError>;
}

/// Bridges an [`FFIConnectionExecutor`] into a [`ConnectionProvider`].
pub struct ForeignConnectionProvider {
    executor: Arc<dyn FFIConnectionExecutor>,
}

impl ForeignConnectionProvider {
    pub fn new(executor: Arc<dyn FFIConnectionExecutor>) -> Self {
        Self { executor }
    }
}

impl ConnectionProvider for ForeignConnectionProvider {
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        self.executor.execute_connection_request(
            FFIConnectionRequest::from(&request),
            Arc::new(listener.into()),
        )
    }
}
