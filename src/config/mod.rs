mod config_error;
mod default_provider_settings;
mod dispatcher_config;
mod transport_config;

pub use config_error::*;
pub use default_provider_settings::*;
pub use dispatcher_config::*;
pub use transport_config::*;
