//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Validation is a pure function and reports all errors, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::StoreConfig;

/// A single semantic configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Bind address is not a parseable socket address.
    InvalidBindAddress(String),
    /// A timeout was configured as zero.
    ZeroTimeout(&'static str),
    /// Inbound request timeout is shorter than the relay timeout, so every
    /// slow upstream would be cut off by the server instead of the relay.
    RequestTimeoutTooShort { request_secs: u64, relay_ms: u64 },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "invalid bind address '{addr}'")
            }
            ValidationError::ZeroTimeout(field) => {
                write!(f, "{field} must be greater than zero")
            }
            ValidationError::RequestTimeoutTooShort {
                request_secs,
                relay_ms,
            } => write!(
                f,
                "request timeout ({request_secs}s) is shorter than the relay timeout ({relay_ms}ms)"
            ),
        }
    }
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &StoreConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.relay.timeout_ms == 0 {
        errors.push(ValidationError::ZeroTimeout("relay.timeout_ms"));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("timeouts.request_secs"));
    }

    if config.relay.timeout_ms > 0
        && config.timeouts.request_secs > 0
        && config.timeouts.request_secs * 1000 < config.relay.timeout_ms
    {
        errors.push(ValidationError::RequestTimeoutTooShort {
            request_secs: config.timeouts.request_secs,
            relay_ms: config.relay.timeout_ms,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
