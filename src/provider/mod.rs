mod blocking_connection_provider;
mod completion_listener;
mod connection_provider;
mod default_connection_provider;

pub use blocking_connection_provider::*;
pub use completion_listener::*;
pub use connection_provider::*;
pub use default_connection_provider::*;
