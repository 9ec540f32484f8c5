#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Bad client setup: an unknown service type at build time or via `set_service_type`.
    #[error("configuration error: {0}")]
    Configuration(String),
    /// Request rejected before any network I/O.
    #[error("validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Transport(#[from] onelink_common::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
