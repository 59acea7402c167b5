mod config;
mod dispatcher;
mod provider;
mod request;
mod response;
mod transport_error;
mod uniffi_exported;

pub mod prelude {
    pub(crate) use std::{
        collections::HashMap,
        sync::{Arc, Mutex, Weak},
        time::Duration,
    };

    pub(crate) use serde::{Deserialize, Serialize};
    pub(crate) use tokio::sync::oneshot::{channel, Receiver, Sender};
    pub(crate) use uniffi::{export, Enum, Error, Object, Record};

    pub use crate::config::*;
    pub use crate::dispatcher::*;
    pub use crate::provider::*;
    pub use crate::request::*;
    pub use crate::response::*;
    pub use crate::transport_error::*;
    pub use crate::uniffi_exported::*;
}

pub use prelude::*;

uniffi::setup_scaffolding!();
