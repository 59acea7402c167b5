mod connection;
mod transport;

pub use connection::*;
pub use transport::*;
