//! Error types for itemlist-fetch.

use thiserror::Error;

/// Every way a pipeline run can fail.
///
/// All of these collapse to the same "nothing to display" state for callers
/// that use [`collapse`](crate::collapse); the variant is kept for logging
/// and for callers that want to tell the causes apart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {url} returned status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("failed to decode item list: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("fetch cancelled")]
    Cancelled,

    #[error("pipeline task failed: {0}")]
    Task(String),
}

impl Error {
    /// Returns `true` if the run was stopped through its cancellation token.
    pub fn is_cancelled(&self) -> bool { matches!(self, Error::Cancelled) }
}

pub type Result<T> = std::result::Result<T, Error>;
