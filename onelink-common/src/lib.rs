//! HTTP plumbing shared by the onelink client.

mod error;
pub mod helper;
pub mod transport;

pub use error::Error;
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
