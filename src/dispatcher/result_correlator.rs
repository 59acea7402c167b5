use crate::prelude::*;
use std::sync::MutexGuard;
use tokio::{task::AbortHandle, time::Instant};
use tracing::debug;

/// Routes each [`ResponseResult`] back to the caller that submitted the
/// request, by [`RequestId`].
///
/// Removal from the map and delivery happen under the same lock, so of
/// {complete, timeout, cancel} the first one to reach a given id decides the
/// result, everything after is a no-op.
#[derive(Debug, Default)]
pub(crate) struct ResultCorrelator {
    in_flight: Mutex<HashMap<RequestId, InFlightCall>>,
}

impl ResultCorrelator {
    fn lock(&self) -> MutexGuard<'_, HashMap<RequestId, InFlightCall>> {
        self.in_flight
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Hands back `completion` if `id` is already in flight.
    pub(crate) fn register(
        &self,
        id: RequestId,
        completion: Sender<ResponseResult>,
        deadline: Instant,
    ) -> Result<(), Sender<ResponseResult>> {
        let mut in_flight = self.lock();
        if in_flight.contains_key(&id) {
            return Err(completion);
        }
        in_flight.insert(id, InFlightCall::new(completion, deadline));
        Ok(())
    }

    pub(crate) fn attach_driver(&self, id: RequestId, driver: AbortHandle) {
        if let Some(call) = self.lock().get_mut(&id) {
            call.attach_driver(driver);
            return;
        }
        // Already resolved, possibly cancelled before we got here.
        driver.abort();
    }

    /// Returns `true` if `result` was the one delivered for `id`.
    pub(crate) fn resolve(&self, id: RequestId, result: ResponseResult) -> bool {
        let mut in_flight = self.lock();
        let Some(call) = in_flight.remove(&id) else {
            debug!(request_id = %id, "call already resolved, dropping late result");
            return false;
        };
        if !call.deliver(result) {
            debug!(request_id = %id, "caller dropped its handle before delivery");
        }
        debug!(request_id = %id, "call resolved");
        true
    }

    /// Returns `true` if this call did the cancelling.
    pub(crate) fn cancel(&self, id: RequestId) -> bool {
        let driver = {
            let mut in_flight = self.lock();
            let Some(mut call) = in_flight.remove(&id) else {
                return false;
            };
            let driver = call.take_driver();
            call.deliver(ResponseResult::Cancelled);
            driver
        };
        // Outside the lock, the aborted driver resolves through us on drop.
        if let Some(driver) = driver {
            driver.abort();
        }
        debug!(request_id = %id, "call cancelled");
        true
    }

    pub(crate) fn cancel_all(&self) -> usize {
        let drivers = self
            .lock()
            .drain()
            .map(|(_, mut call)| {
                let driver = call.take_driver();
                call.deliver(ResponseResult::Cancelled);
                driver
            })
            .collect::<Vec<_>>();
        for driver in drivers.iter().flatten() {
            driver.abort();
        }
        drivers.len()
    }

    pub(crate) fn deadline(&self, id: RequestId) -> Option<Instant> {
        self.lock().get(&id).map(InFlightCall::deadline)
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    pub(crate) fn contains(&self, id: RequestId) -> bool {
        self.lock().contains_key(&id)
    }
}
