use crate::prelude::*;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Returned by [`Dispatcher::submit`], resolves to the call's
/// [`ResponseResult`] exactly once.
#[derive(Debug)]
pub struct CallHandle {
    request_id: RequestId,
    receiver: Receiver<ResponseResult>,
    canceller: CallCanceller,
}

impl CallHandle {
    pub(crate) fn new(
        request_id: RequestId,
        receiver: Receiver<ResponseResult>,
        canceller: CallCanceller,
    ) -> Self {
        Self {
            request_id,
            receiver,
            canceller,
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// A cloneable way to cancel this call while the handle itself is being
    /// awaited elsewhere.
    pub fn canceller(&self) -> CallCanceller {
        self.canceller.clone()
    }

    pub fn cancel(&self) -> bool {
        self.canceller.cancel()
    }

    /// The result, if it has already been delivered.
    pub(crate) fn try_result(&mut self) -> Option<ResponseResult> {
        self.receiver.try_recv().ok()
    }
}

impl Future for CallHandle {
    type Output = ResponseResult;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| received.unwrap_or_else(|_| DispatchError::DispatcherDropped.into()))
    }
}

#[derive(Debug, Clone)]
pub struct CallCanceller {
    request_id: RequestId,
    correlator: Weak<ResultCorrelator>,
}

impl CallCanceller {
    pub(crate) fn new(request_id: RequestId, correlator: Weak<ResultCorrelator>) -> Self {
        Self {
            request_id,
            correlator,
        }
    }

    /// Cancels nothing, for handles whose call was never registered.
    pub(crate) fn detached(request_id: RequestId) -> Self {
        Self::new(request_id, Weak::new())
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Idempotent, returns `true` only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        self.correlator
            .upgrade()
            .map_or(false, |correlator| correlator.cancel(self.request_id))
    }
}
