#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("transport error: {0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
