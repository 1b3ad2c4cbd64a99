//! Errors raised while talking to the registration endpoint

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid client configuration: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
}
