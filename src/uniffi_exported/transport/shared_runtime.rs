use crate::prelude::*;
use tokio::runtime::{Builder, Handle, Runtime};

/// The runtime behind an [`FFIProfilingTransport`], shared with every
/// [`FFICallHandle`] it hands out, so that a handle outliving its transport
/// still gets its result. Shut down once the last of them is dropped.
#[derive(Debug)]
pub(crate) struct SharedRuntime {
    runtime: Option<Runtime>,
    handle: Handle,
}

impl SharedRuntime {
    pub(crate) fn new() -> Result<Arc<Self>, FFITransportSetupError> {
        let runtime = Builder::new_multi_thread()
            .enable_all()
            .thread_name("profiling-transport")
            .build()
            .map_err(|e| FFITransportSetupError::RuntimeUnavailable {
                reason: e.to_string(),
            })?;
        Ok(Arc::new(Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
        }))
    }

    pub(crate) fn handle(&self) -> &Handle {
        &self.handle
    }
}

impl Drop for SharedRuntime {
    fn drop(&mut self) {
        // The last reference may be released from one of our own worker
        // threads, where a blocking shutdown would panic.
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
        }
    }
}
