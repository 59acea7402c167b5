use crate::prelude::*;
use tokio::runtime::Handle;
use tracing::debug;

/// Explicit configuration of a [`Dispatcher`]: which [`ConnectionProvider`]
/// to route requests to, and on which runtime to drive them.
#[derive(Default)]
pub struct DispatcherBuilder {
    connection_provider: Option<Arc<dyn ConnectionProvider>>,
    runtime: Option<Handle>,
    config: TransportConfig,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom host implementation, [`DefaultConnectionProvider`] if never set.
    pub fn connection_provider(mut self, connection_provider: Arc<dyn ConnectionProvider>) -> Self {
        self.connection_provider = Some(connection_provider);
        self
    }

    pub fn runtime(mut self, runtime: Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    pub fn config(mut self, config: TransportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Result<Dispatcher, DispatcherBuildError> {
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => Handle::try_current().map_err(|_| DispatcherBuildError::NoRuntime)?,
        };

        let connection_provider = match self.connection_provider {
            Some(custom) => {
                debug!("dispatcher using custom connection provider");
                custom
            }
            None => {
                debug!("dispatcher using default connection provider");
                Arc::new(DefaultConnectionProvider::new(
                    self.config.default_provider.clone(),
                ))
            }
        };

        Ok(Dispatcher::with_parts(
            connection_provider,
            runtime,
            self.config.dispatcher,
        ))
    }
}
