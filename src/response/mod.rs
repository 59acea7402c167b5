mod http_response;
mod response_result;
mod transport_failure;

pub use http_response::*;
pub use response_result::*;
pub use transport_failure::*;
