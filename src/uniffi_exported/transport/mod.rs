mod ffi_call_handle;
mod ffi_profiling_request;
mod ffi_profiling_transport;
mod ffi_response_result;
mod ffi_response_result_listener;
mod ffi_transport_setup_error;
mod shared_runtime;

pub use ffi_call_handle::*;
pub use ffi_profiling_request::*;
pub use ffi_profiling_transport::*;
pub use ffi_response_result::*;
pub use ffi_response_result_listener::*;
pub use ffi_transport_setup_error::*;
pub(crate) use shared_runtime::*;
