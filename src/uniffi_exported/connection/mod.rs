mod ffi_connection_executor;
mod ffi_connection_outcome;
mod ffi_connection_outcome_listener;
mod ffi_connection_request;
mod ffi_connection_response;

pub use ffi_connection_executor::*;
pub use ffi_connection_outcome::*;
pub use ffi_connection_outcome_listener::*;
pub use ffi_connection_request::*;
pub use ffi_connection_response::*;
