use crate::prelude::*;
use tokio::{task::AbortHandle, time::Instant};

/// Bookkeeping for one outstanding request, owned by the [`ResultCorrelator`].
#[derive(Debug)]
pub(crate) struct InFlightCall {
    completion: Sender<ResponseResult>,
    deadline: Instant,
    /// The task awaiting the provider, attached right after it is spawned.
    driver: Option<AbortHandle>,
}

impl InFlightCall {
    pub(crate) fn new(completion: Sender<ResponseResult>, deadline: Instant) -> Self {
        Self {
            completion,
            deadline,
            driver: None,
        }
    }

    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    pub(crate) fn attach_driver(&mut self, driver: AbortHandle) {
        self.driver = Some(driver);
    }

    /// Aborting it stops waiting for the provider, the provider itself is not
    /// interrupted.
    pub(crate) fn take_driver(&mut self) -> Option<AbortHandle> {
        self.driver.take()
    }

    /// Returns `false` if the caller already dropped its [`CallHandle`].
    pub(crate) fn deliver(self, result: ResponseResult) -> bool {
        self.completion.send(result).is_ok()
    }
}
