//! Error types for provider calls

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("provider not found: {0}")]
    ProviderNotFound(String),

    #[error("missing API key for provider: {0}")]
    MissingApiKey(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    pub fn provider_error(msg: impl Into<String>) -> Self {
        Error::Provider(msg.into())
    }

    pub fn invalid_response(msg: impl Into<String>) -> Self {
        Error::InvalidResponse(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
