use crate::prelude::*;
use tokio::runtime::Handle;
use tracing::debug;

/// Fallback [`ConnectionProvider`] for hosts that want no customization.
///
/// Opens a fresh connection per request with the platform default TLS and
/// proxy settings. No pooling, no retry, no backoff: those are exactly what a
/// host is expected to bring with its own provider.
#[derive(Debug, Clone, Default)]
pub struct DefaultConnectionProvider {
    settings: DefaultProviderSettings,
}

impl DefaultConnectionProvider {
    pub fn new(settings: DefaultProviderSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &DefaultProviderSettings {
        &self.settings
    }

    fn client_for(&self, request: &RequestDescriptor) -> Result<reqwest::Client, ConnectionError> {
        let mut builder = reqwest::Client::builder()
            .pool_max_idle_per_host(0)
            .timeout(request.timeout());

        if let Some(connect_timeout) = self.settings.connect_timeout() {
            builder = builder.connect_timeout(connect_timeout);
        }
        if self.settings.no_proxy {
            builder = builder.no_proxy();
        }
        if let Some(user_agent) = &self.settings.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build().map_err(ConnectionError::from)
    }

    async fn send(client: reqwest::Client, request: RequestDescriptor) -> ConnectionOutcome {
        let mut outgoing = client.request(request.method().into(), request.url().clone());
        for (name, value) in request.headers() {
            outgoing = outgoing.header(name, value);
        }
        if let Some(body) = request.body() {
            outgoing = outgoing.body(body.to_vec());
        }

        let response = outgoing.send().await?;
        let status_code = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_owned(), v.to_owned()))
            })
            .collect::<HashMap<_, _>>();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse::new(status_code, headers, body))
    }
}

impl ConnectionProvider for DefaultConnectionProvider {
    fn execute(
        &self,
        request: RequestDescriptor,
        listener: CompletionListener,
    ) -> Result<(), ConnectionError> {
        let runtime = Handle::try_current().map_err(|e| ConnectionError::RequestFailed {
            status_code: None,
            underlying: Some(e.to_string()),
        })?;
        let client = self.client_for(&request)?;

        debug!(request_id = %request.id(), method = %request.method(), url = %request.url(), "default provider sending request");
        runtime.spawn(async move {
            let outcome = Self::send(client, request).await;
            listener.notify_outcome(outcome);
        });
        Ok(())
    }
}

impl From<reqwest::Error> for ConnectionError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return Self::TimedOut;
        }
        if value.is_builder() {
            if let Some(url) = value.url() {
                return Self::InvalidUrl {
                    url: url.to_string(),
                };
            }
        }
        Self::RequestFailed {
            status_code: value.status().map(|s| s.as_u16()),
            underlying: Some(value.to_string()),
        }
    }
}
