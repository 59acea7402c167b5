use crate::prelude::*;
use tracing::{debug, warn};

pub type ConnectionOutcome = Result<HttpResponse, ConnectionError>;

/// An object representing that the [`Dispatcher`] is listening on the outcome
/// of a request carried out by a [`ConnectionProvider`]. When the provider has
/// finished, either successfully or with failure, it passes back the outcome
/// by calling `notify_outcome`. This is effectively a callback pattern.
#[derive(Debug)]
pub struct CompletionListener {
    request_id: RequestId,
    sender: Mutex<Option<Sender<ConnectionOutcome>>>,
}

impl CompletionListener {
    pub(crate) fn new(request_id: RequestId, sender: Sender<ConnectionOutcome>) -> Self {
        Self {
            request_id,
            sender: Mutex::new(Some(sender)),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Only the first call has any effect. Outcomes arriving after the call
    /// was cancelled or timed out are dropped silently.
    pub fn notify_outcome(&self, outcome: ConnectionOutcome) {
        let sender = self
            .sender
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take();

        let Some(sender) = sender else {
            warn!(request_id = %self.request_id, "connection provider notified outcome twice, ignoring");
            return;
        };

        if sender.send(outcome).is_err() {
            debug!(request_id = %self.request_id, "call already resolved, dropping late outcome");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_outcome_wins() {
        let (sender, receiver) = channel();
        let listener = CompletionListener::new(RequestId::generate(), sender);

        listener.notify_outcome(Ok(HttpResponse::with_status(200)));
        listener.notify_outcome(Err(ConnectionError::TimedOut));

        assert_eq!(receiver.await.unwrap(), Ok(HttpResponse::with_status(200)));
    }

    #[test]
    fn notify_after_receiver_dropped_does_not_panic() {
        let (sender, receiver) = channel();
        let listener = CompletionListener::new(RequestId::generate(), sender);
        drop(receiver);
        listener.notify_outcome(Ok(HttpResponse::with_status(200)));
    }
}
