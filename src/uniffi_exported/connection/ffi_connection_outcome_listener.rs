use crate::prelude::*;

/// Handed to the FFI side together with each [`FFIConnectionRequest`], the
/// host calls `notify_outcome` once the request has finished.
#[derive(Object, Debug)]
pub struct FFIConnectionOutcomeListener {
    completion_listener: CompletionListener,
}

impl From<CompletionListener> for FFIConnectionOutcomeListener {
    fn from(completion_listener: CompletionListener) -> Self {
        Self {
            completion_listener,
        }
    }
}

#[export]
impl FFIConnectionOutcomeListener {
    /// Called from FFI Side (Swift side), inside the implementation of
    /// `execute_connection_request`, when the request has finished. Calling
    /// it more than once has no effect.
    pub fn notify_outcome(&self, outcome: FFIConnectionOutcome) {
        self.completion_listener.notify_outcome(outcome.into())
    }
}
