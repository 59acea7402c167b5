use crate::prelude::*;

/// Entry point for FFI hosts (Swift/Kotlin side), which have no tokio
/// runtime of their own: owns one, plus the [`Dispatcher`] driven on it.
///
/// Dropping the transport does not cancel anything, handles already handed
/// out keep the runtime alive until they are dropped too.
#[derive(Object)]
pub struct FFIProfilingTransport {
    runtime: Arc<SharedRuntime>,
    dispatcher: Dispatcher,
}

impl FFIProfilingTransport {
    fn with_connection_provider(
        connection_provider: Option<Arc<dyn ConnectionProvider>>,
        config_json: Option<String>,
    ) -> Result<Self, FFITransportSetupError> {
        let config = config_json
            .map(TransportConfig::from_json_str)
            .transpose()?
            .unwrap_or_default();

        let runtime = SharedRuntime::new()?;

        let mut builder = Dispatcher::builder()
            .runtime(runtime.handle().clone())
            .config(config);
        if let Some(connection_provider) = connection_provider {
            builder = builder.connection_provider(connection_provider);
        }
        let dispatcher = builder
            .build()
            .map_err(|e| FFITransportSetupError::RuntimeUnavailable {
                reason: e.to_string(),
            })?;

        Ok(Self {
            runtime,
            dispatcher,
        })
    }
}

#[export]
impl FFIProfilingTransport {
    /// Routes every request to `connection_executor`, implemented FFI side.
    #[uniffi::constructor]
    pub fn new(
        connection_executor: Arc<dyn FFIConnectionExecutor>,
        config_json: Option<String>,
    ) -> Result<Arc<Self>, FFITransportSetupError> {
        let connection_provider = Arc::new(ForeignConnectionProvider::new(connection_executor));
        Self::with_connection_provider(Some(connection_provider), config_json).map(Arc::new)
    }

    /// Uses [`DefaultConnectionProvider`], for hosts that want no customization.
    #[uniffi::constructor]
    pub fn with_default_connections(
        config_json: Option<String>,
    ) -> Result<Arc<Self>, FFITransportSetupError> {
        Self::with_connection_provider(None, config_json).map(Arc::new)
    }

    pub fn submit(&self, request: FFIProfilingRequest) -> Result<Arc<FFICallHandle>, RequestError> {
        let descriptor = RequestDescriptor::try_from(request)?;
        let handle = self.dispatcher.submit(descriptor);
        Ok(Arc::new(FFICallHandle::new(
            handle,
            self.dispatcher.clone(),
            self.runtime.clone(),
        )))
    }

    pub fn in_flight_count(&self) -> u64 {
        self.dispatcher.in_flight_count() as u64
    }

    pub fn cancel_all(&self) -> u64 {
        self.dispatcher.cancel_all() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    struct EchoExecutor;

    impl FFIConnectionExecutor for EchoExecutor {
        fn execute_connection_request(
            &self,
            request: FFIConnectionRequest,
            listener_rust_side: Arc<FFIConnectionOutcomeListener>,
        ) -> Result<(), ConnectionError> {
            listener_rust_side.notify_outcome(FFIConnectionOutcome::Success {
                value: FFIConnectionResponse {
                    status_code: 200,
                    headers: HashMap::new(),
                    body: request.request_id.into_bytes(),
                },
            });
            Ok(())
        }
    }

    struct RefusingExecutor;

    impl FFIConnectionExecutor for RefusingExecutor {
        fn execute_connection_request(
            &self,
            request: FFIConnectionRequest,
            _listener_rust_side: Arc<FFIConnectionOutcomeListener>,
        ) -> Result<(), ConnectionError> {
            Err(ConnectionError::InvalidUrl { url: request.url })
        }
    }

    /// Keeps every listener and never notifies any of them.
    #[derive(Default)]
    struct SilentExecutor(Mutex<Vec<Arc<FFIConnectionOutcomeListener>>>);

    impl FFIConnectionExecutor for SilentExecutor {
        fn execute_connection_request(
            &self,
            _request: FFIConnectionRequest,
            listener_rust_side: Arc<FFIConnectionOutcomeListener>,
        ) -> Result<(), ConnectionError> {
            self.0.lock().unwrap().push(listener_rust_side);
            Ok(())
        }
    }

    struct ChannelListener(Mutex<mpsc::Sender<FFIResponseResult>>);

    impl FFIResponseResultListener for ChannelListener {
        fn on_result(&self, result: FFIResponseResult) {
            let _ = self.0.lock().unwrap().send(result);
        }
    }

    fn listener() -> (Arc<ChannelListener>, mpsc::Receiver<FFIResponseResult>) {
        let (sender, receiver) = mpsc::channel();
        (Arc::new(ChannelListener(Mutex::new(sender))), receiver)
    }

    fn request() -> FFIProfilingRequest {
        FFIProfilingRequest {
            url: "https://h.example.com/fp".to_owned(),
            method: "GET".to_owned(),
            headers: HashMap::new(),
            body: None,
            timeout_ms: Some(2_000),
        }
    }

    #[test]
    fn foreign_executor_result_reaches_foreign_listener() {
        let transport = FFIProfilingTransport::new(Arc::new(EchoExecutor), None).unwrap();
        let handle = transport.submit(request()).unwrap();
        let (listener, results) = listener();

        assert!(handle.on_complete(listener.clone()));
        assert!(!handle.on_complete(listener));

        let result = results.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(
            result,
            FFIResponseResult::Success {
                value: FFIConnectionResponse {
                    status_code: 200,
                    headers: HashMap::new(),
                    body: handle.request_id().into_bytes(),
                }
            }
        );
        assert_eq!(transport.in_flight_count(), 0);
    }

    #[test]
    fn executor_error_is_delivered_as_transport_error() {
        let transport = FFIProfilingTransport::new(Arc::new(RefusingExecutor), None).unwrap();
        let handle = transport.submit(request()).unwrap();
        let (listener, results) = listener();
        handle.on_complete(listener);

        let result = results.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(matches!(
            result,
            FFIResponseResult::Failure {
                kind: ErrorKind::TransportError,
                ..
            }
        ));
    }

    #[test]
    fn invalid_config_json_is_rejected() {
        assert!(matches!(
            FFIProfilingTransport::with_default_connections(Some("{".to_owned())),
            Err(FFITransportSetupError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn invalid_request_is_rejected_before_submit() {
        let transport = FFIProfilingTransport::with_default_connections(None).unwrap();
        let mut bad = request();
        bad.url = "::".to_owned();
        assert!(matches!(
            transport.submit(bad),
            Err(RequestError::InvalidUrl { .. })
        ));
        assert_eq!(transport.in_flight_count(), 0);
    }

    #[test]
    fn handle_outliving_transport_still_times_out() {
        let transport =
            FFIProfilingTransport::new(Arc::new(SilentExecutor::default()), None).unwrap();
        let mut silent = request();
        silent.timeout_ms = Some(200);
        let handle = transport.submit(silent).unwrap();
        drop(transport);

        let (listener, results) = listener();
        assert!(handle.on_complete(listener));

        let result = results.recv_timeout(Duration::from_secs(3)).unwrap();
        assert!(matches!(
            result,
            FFIResponseResult::Failure {
                kind: ErrorKind::Timeout,
                ..
            }
        ));
    }

    #[test]
    fn handle_outliving_transport_still_gets_completed_result() {
        let transport = FFIProfilingTransport::new(Arc::new(EchoExecutor), None).unwrap();
        let handle = transport.submit(request()).unwrap();
        drop(transport);

        let (listener, results) = listener();
        handle.on_complete(listener);

        let result = results.recv_timeout(Duration::from_secs(3)).unwrap();
        assert!(matches!(
            result,
            FFIResponseResult::Success { value } if value.body == handle.request_id().into_bytes()
        ));
    }
}
