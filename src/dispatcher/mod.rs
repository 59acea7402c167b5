mod call_handle;
mod dispatcher;
mod dispatcher_build_error;
mod dispatcher_builder;
mod in_flight_call;
mod result_correlator;

pub use call_handle::*;
pub use dispatcher::*;
pub use dispatcher_build_error::*;
pub use dispatcher_builder::*;
pub(crate) use in_flight_call::*;
pub(crate) use result_correlator::*;
