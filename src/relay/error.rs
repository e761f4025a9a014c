//! Error types for the fetch relay.

use thiserror::Error;

/// Errors that can occur while relaying an outbound fetch.
///
/// Every variant carries the flattened message of the underlying transport
/// failure; callers echo it back to the client unchanged.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Destination string was empty.
    #[error("destination must not be empty")]
    EmptyDestination,

    /// Request exceeded its timeout.
    #[error("{0}")]
    Timeout(String),

    /// Connection could not be established (refused, DNS failure, ...).
    #[error("{0}")]
    Connect(String),

    /// Redirect budget exceeded or redirect loop detected.
    #[error("{0}")]
    TooManyRedirects(String),

    /// Any other transport-level failure.
    #[error("{0}")]
    Request(String),
}

impl RelayError {
    /// Classify a reqwest error, preserving its full message chain.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        let detail = error_chain(&err);
        if err.is_timeout() {
            RelayError::Timeout(detail)
        } else if err.is_connect() {
            RelayError::Connect(detail)
        } else if err.is_redirect() {
            RelayError::TooManyRedirects(detail)
        } else {
            RelayError::Request(detail)
        }
    }
}

/// Flatten an error and its sources into one message.
///
/// reqwest's Display omits the cause chain; the chain is where the useful
/// part ("Connection refused", "failed to lookup address") lives.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
