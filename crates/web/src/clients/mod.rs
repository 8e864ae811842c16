pub mod identity;
pub mod images;

use thiserror::Error;

/// Errors from the external identity and object-storage services.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service rejected the call; the message is passed through verbatim.
    #[error("{0}")]
    Service(String),

    #[error("Unauthorized")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, ClientError>;
