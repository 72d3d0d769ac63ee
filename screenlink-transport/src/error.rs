//! Transport errors

use std::time::Duration;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Invalid device address: {0}")]
    InvalidAddress(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
