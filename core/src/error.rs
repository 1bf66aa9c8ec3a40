use thiserror::Error;

#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Unknown request type: {0}")]
    UnknownRequestType(String),
    #[error("Unsupported request type: {0}")]
    UnsupportedRequestType(String),
}

impl RequestError {
    pub fn null(key: &str) -> Self {
        RequestError::InvalidArgument(format!("{} is null", key))
    }
}
