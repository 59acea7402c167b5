use profiling_transport::*;
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        mpsc, Arc, Mutex,
    },
    time::Duration,
};
use tokio::runtime::Handle;

pub fn request(url: &str) -> RequestDescriptor {
    RequestDescriptor::builder(url).build().unwrap()
}

pub fn request_with_timeout(url: &str, timeout: Duration) -> RequestDescriptor {
    RequestDescriptor::builder(url)
        .timeout(timeout)
        .build()
        .unwrap()
}

/// Echoes the request id back as the body, so cross delivery is detectable.
pub fn echo_response(request: &RequestDescriptor) -> HttpResponse {
    HttpResponse::new(
        200,
        HashMap::from_iter([("x-request-id".to_owned(), request.id().to_string())]),
        request.id().to_string().into_bytes(),
    )
}

pub fn echo_provider() -> Arc<dyn ConnectionProvider> {
    Arc::new(BlockingConnectionProvider::new(|request: &RequestDescriptor| {
        Ok(echo_response(request))
    }))
}

/// Synchronous provider that blocks inside `execute` until the returned
/// sender sends or is dropped, then echoes.
pub fn stuck_provider() -> (Arc<dyn ConnectionProvider>, mpsc::Sender<()>) {
    let (release, released) = mpsc::channel::<()>();
    let released = Mutex::new(released);
    let provider = BlockingConnectionProvider::new(move |request: &RequestDescriptor| {
        let _ = released.lock().unwrap().recv();
        Ok(echo_response(request))
    });
    (Arc::new(provider), release)
}

/// Asynchronous provider, completes after the delay given in the
/// `x-delay-ms` header (or `default_delay`).
pub struct DelayedProvider {
    default_delay: Duration,
    completed: Arc<AtomicUsize>,
}

impl DelayedProvider {
    pub fn new(default_delay: Duration) -> Self {
        Self {
            default_delay,
            completed: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

impl ConnectionProvider for DelayedProvider {
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        let delay = request
            .header("x-delay-ms")
            .and_then(|ms| ms.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(self.default_delay);
        let completed = self.completed.clone();
        Handle::current().spawn(async move {
            tokio::time::sleep(delay).await;
            completed.fetch_add(1, Ordering::SeqCst);
            listener.notify_outcome(Ok(echo_response(&request)));
        });
        Ok(())
    }
}

/// Holds on to every listener and never notifies.
#[derive(Default)]
pub struct NeverRespondingProvider {
    listeners: Mutex<Vec<CompletionListener>>,
}

impl NeverRespondingProvider {
    pub fn held(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }
}

impl ConnectionProvider for NeverRespondingProvider {
    fn execute(
        &self,
        _request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        self.listeners.lock().unwrap().push(listener);
        Ok(())
    }
}

/// Panics on any path containing `boom`, echoes otherwise.
pub struct PanickingProvider;

impl ConnectionProvider for PanickingProvider {
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        if request.url().path().contains("boom") {
            panic!("host transport blew up");
        }
        listener.notify_outcome(Ok(echo_response(&request)));
        Ok(())
    }
}

/// Refuses every request up front.
pub struct RefusingProvider;

impl ConnectionProvider for RefusingProvider {
    fn execute(
        &self,
        _request: RequestDescriptor,
        _listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        Err(ConnectionError::RequestFailed {
            status_code: None,
            underlying: Some("no route to host".to_owned()),
        })
    }
}

/// Accepts the request, then drops the listener on the floor.
pub struct ForgetfulProvider;

impl ConnectionProvider for ForgetfulProvider {
    fn execute(
        &self,
        _request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        drop(listener);
        Ok(())
    }
}
