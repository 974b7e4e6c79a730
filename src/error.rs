use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoyageError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Catalog request failed: {0}")]
    ApiError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type VoyageResult<T> = Result<T, VoyageError>;
