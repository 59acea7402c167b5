use crate::prelude::*;
use tokio::{
    runtime::Handle,
    task::spawn_blocking,
    time::{sleep_until, Instant},
};
use tracing::{debug, warn};

/// Stand-in deadline for timeouts too large to represent as an [`Instant`].
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

fn deadline_after(timeout: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(timeout).unwrap_or_else(|| now + FAR_FUTURE)
}

/// Accepts requests from the embedded caller, routes each one to the
/// [`ConnectionProvider`], enforces its deadline and hands back the
/// [`ResponseResult`] asynchronously.
///
/// `submit` never blocks and never fails, every outcome (including timeouts,
/// cancellations and provider panics) reaches the caller as a
/// [`ResponseResult`]. The only shared mutable state is the
/// [`ResultCorrelator`].
#[derive(Clone)]
pub struct Dispatcher {
    connection_provider: Arc<dyn ConnectionProvider>,
    correlator: Arc<ResultCorrelator>,
    runtime: Handle,
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Dispatcher on the current tokio runtime, routing to `connection_provider`.
    pub fn new(
        connection_provider: Arc<dyn ConnectionProvider>,
    ) -> Result<Self, DispatcherBuildError> {
        Self::builder()
            .connection_provider(connection_provider)
            .build()
    }

    pub(crate) fn with_parts(
        connection_provider: Arc<dyn ConnectionProvider>,
        runtime: Handle,
        config: DispatcherConfig,
    ) -> Self {
        Self {
            connection_provider,
            correlator: Arc::new(ResultCorrelator::default()),
            runtime,
            config,
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    pub fn submit(&self, request: RequestDescriptor) -> CallHandle {
        let request_id = request.id();
        let timeout = self.config.effective_timeout(request.timeout());
        let deadline = deadline_after(timeout);
        let (completion, receiver) = channel();

        if let Err(completion) = self.correlator.register(request_id, completion, deadline) {
            warn!(%request_id, "request id already in flight, rejecting duplicate submit");
            let _ = completion.send(DispatchError::DuplicateRequest { id: request_id }.into());
            return CallHandle::new(
                request_id,
                receiver,
                CallCanceller::detached(request_id),
            );
        }

        debug!(
            %request_id,
            method = %request.method(),
            url = %request.url(),
            ?timeout,
            "submitting request"
        );

        let connection_provider = self.connection_provider.clone();
        let resolver = Resolver::new(request_id, self.correlator.clone());
        let driver = self.runtime.spawn(async move {
            let result = tokio::select! {
                result = invoke(connection_provider, request) => result,
                _ = sleep_until(deadline) => {
                    debug!(%request_id, ?timeout, "deadline elapsed");
                    ResponseResult::timed_out(timeout)
                }
            };
            resolver.resolve(result);
        });
        self.correlator
            .attach_driver(request_id, driver.abort_handle());

        CallHandle::new(
            request_id,
            receiver,
            CallCanceller::new(request_id, Arc::downgrade(&self.correlator)),
        )
    }

    /// Idempotent, returns `true` only if this call did the cancelling.
    pub fn cancel(&self, handle: &CallHandle) -> bool {
        handle.cancel()
    }

    /// Runs `callback` with the call's result on a runtime worker, never on
    /// the calling thread.
    ///
    /// If the runtime is shut down first, `callback` still runs once, possibly
    /// on the calling thread, with whatever result the call had by then or an
    /// [`ErrorKind::TransportError`] failure.
    pub fn on_complete<F>(&self, handle: CallHandle, callback: F)
    where
        F: FnOnce(ResponseResult) + Send + 'static,
    {
        let completion = CompletionCallback::new(handle, callback);
        self.runtime.spawn(completion.run());
    }

    /// Resolves every pending call as [`ResponseResult::Cancelled`].
    pub fn cancel_all(&self) -> usize {
        let cancelled = self.correlator.cancel_all();
        debug!(cancelled, "cancelled all in flight calls");
        cancelled
    }

    pub fn in_flight_count(&self) -> usize {
        self.correlator.len()
    }

    pub fn is_in_flight(&self, request_id: RequestId) -> bool {
        self.correlator.contains(request_id)
    }

    /// Time left before the call times out, `None` once it has resolved.
    pub fn time_remaining(&self, request_id: RequestId) -> Option<Duration> {
        self.correlator
            .deadline(request_id)
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }
}

/// Owned by the task driving a call. If that task is dropped without having
/// resolved the call, e.g. because the runtime shut down, the call resolves
/// as [`DispatchError::DispatcherDropped`] instead of staying in flight.
struct Resolver {
    request_id: RequestId,
    correlator: Arc<ResultCorrelator>,
    resolved: bool,
}

impl Resolver {
    fn new(request_id: RequestId, correlator: Arc<ResultCorrelator>) -> Self {
        Self {
            request_id,
            correlator,
            resolved: false,
        }
    }

    fn resolve(mut self, result: ResponseResult) {
        self.resolved = true;
        self.correlator.resolve(self.request_id, result);
    }
}

impl Drop for Resolver {
    fn drop(&mut self) {
        if self.resolved {
            return;
        }
        if self
            .correlator
            .resolve(self.request_id, DispatchError::DispatcherDropped.into())
        {
            warn!(request_id = %self.request_id, "driver dropped before the call resolved");
        }
    }
}

/// Calls back exactly once, even when the task running it never gets to.
struct CompletionCallback<F>
where
    F: FnOnce(ResponseResult),
{
    handle: CallHandle,
    callback: Option<F>,
}

impl<F> CompletionCallback<F>
where
    F: FnOnce(ResponseResult),
{
    fn new(handle: CallHandle, callback: F) -> Self {
        Self {
            handle,
            callback: Some(callback),
        }
    }

    async fn run(mut self) {
        let result = (&mut self.handle).await;
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl<F> Drop for CompletionCallback<F>
where
    F: FnOnce(ResponseResult),
{
    fn drop(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        debug!(request_id = %self.handle.request_id(), "completion task dropped, calling back inline");
        let result = self
            .handle
            .try_result()
            .unwrap_or_else(|| DispatchError::DispatcherDropped.into());
        callback(result);
    }
}

/// Runs the provider on the blocking pool, so that a synchronous provider
/// never holds up the runtime nor the submitting thread, then awaits the
/// outcome it notifies.
async fn invoke(
    connection_provider: Arc<dyn ConnectionProvider>,
    request: RequestDescriptor,
) -> ResponseResult {
    let request_id = request.id();
    let (sender, receiver) = channel::<ConnectionOutcome>();
    let listener = CompletionListener::new(request_id, sender);

    let execution = spawn_blocking(move || connection_provider.execute(request, listener)).await;
    match execution {
        Ok(Ok(())) => {}
        Ok(Err(error)) => {
            debug!(%request_id, %error, "connection provider rejected request");
            return ResponseResult::from(Err::<HttpResponse, _>(error));
        }
        Err(join_error) if join_error.is_panic() => {
            warn!(%request_id, "connection provider panicked");
            return DispatchError::ProviderPanicked.into();
        }
        Err(_) => return DispatchError::DispatcherDropped.into(),
    }

    match receiver.await {
        Ok(outcome) => outcome.into(),
        Err(_) => {
            warn!(%request_id, "connection provider dropped listener without an outcome");
            DispatchError::ListenerDroppedWithoutOutcome.into()
        }
    }
}
