use crate::prelude::*;

/// Adapts a plain synchronous function into a [`ConnectionProvider`], for
/// hosts whose transport simply blocks until it has a response.
pub struct BlockingConnectionProvider<F> {
    execute: F,
}

impl<F> BlockingConnectionProvider<F>
where
    F: Fn(&RequestDescriptor) -> ConnectionOutcome + Send + Sync,
{
    pub fn new(execute: F) -> Self {
        Self { execute }
    }
}

impl<F> ConnectionProvider for BlockingConnectionProvider<F>
where
    F: Fn(&RequestDescriptor) -> ConnectionOutcome + Send + Sync,
{
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        listener.notify_outcome((self.execute)(&request));
        Ok(())
    }
}
