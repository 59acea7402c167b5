use crate::prelude::*;
use tracing::warn;

#[derive(Object)]
pub struct FFICallHandle {
    request_id: RequestId,
    canceller: CallCanceller,
    pending: Mutex<Option<CallHandle>>,
    dispatcher: Dispatcher,
    /// Keeps the runtime driving this call alive after the transport is gone.
    _runtime: Arc<SharedRuntime>,
}

impl FFICallHandle {
    pub(crate) fn new(
        handle: CallHandle,
        dispatcher: Dispatcher,
        runtime: Arc<SharedRuntime>,
    ) -> Self {
        Self {
            request_id: handle.request_id(),
            canceller: handle.canceller(),
            pending: Mutex::new(Some(handle)),
            dispatcher,
            _runtime: runtime,
        }
    }
}

#[export]
impl FFICallHandle {
    pub fn request_id(&self) -> String {
        self.request_id.to_string()
    }

    pub fn cancel(&self) -> bool {
        self.canceller.cancel()
    }

    /// Only the first listener registered receives the result, returns
    /// `false` for any later one.
    pub fn on_complete(&self, listener: Arc<dyn FFIResponseResultListener>) -> bool {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        let Some(handle) = pending else {
            warn!(request_id = %self.request_id, "on_complete called twice, ignoring");
            return false;
        };

        self.dispatcher
            .on_complete(handle, move |result| listener.on_result(result.into()));
        true
    }
}
