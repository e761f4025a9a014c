//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files, and
//! every section has a `Default` so a missing file or section still yields a
//! runnable configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the storefront API.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Outbound fetch relay settings.
    pub relay: RelayConfig,

    /// Inbound request timeout.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Outbound fetch relay settings.
///
/// These bound how long a single relay call may run and how many redirects
/// the client will chase. There are no destination settings: the relay
/// fetches whatever it is told to.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RelayConfig {
    /// Total timeout per outbound request in milliseconds.
    pub timeout_ms: u64,

    /// Maximum redirects followed per outbound request.
    pub max_redirects: usize,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 5000,
            max_redirects: 5,
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log filter directive (trace, debug, info, warn, error).
    pub log_level: String,

    /// Emit JSON log records instead of the pretty development format.
    pub json_logs: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logs: false,
        }
    }
}
