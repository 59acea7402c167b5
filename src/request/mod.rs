mod http_method;
mod request_descriptor;
mod request_descriptor_builder;
mod request_error;
mod request_id;

pub use http_method::*;
pub use request_descriptor::*;
pub use request_descriptor_builder::*;
pub use request_error::*;
pub use request_id::*;
