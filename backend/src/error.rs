use fed_core::error::RequestError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("Handler error: {0}")]
    Handler(anyhow::Error),
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),
}
