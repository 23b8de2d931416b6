use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid endpoint URL: {0}")]
    Endpoint(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response status: {status}")]
    Status { status: StatusCode },
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}
