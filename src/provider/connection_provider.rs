use crate::prelude::*;

/// The transport capability supplied by the host application. The
/// [`Dispatcher`] hands it each [`RequestDescriptor`] together with a
/// [`CompletionListener`], it can e.g. be a wrapper around the host's own
/// HTTP stack doing proxying, certificate pinning or connection reuse.
///
/// Implementations may be synchronous (notify the listener before returning)
/// or asynchronous (keep the listener and notify it later, from any thread).
/// `execute` is always invoked off the submitting thread, and may be invoked
/// concurrently for different requests.
///
/// Implementations must notify the listener at most once, and should yield
/// [`ConnectionError::TimedOut`] rather than hold resources past
/// [`RequestDescriptor::timeout`]. Returning `Err` is equivalent to notifying
/// that error.
pub trait ConnectionProvider: Send + Sync {
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError>;
}
