//! Outbound fetch relay subsystem.
//!
//! # Data Flow
//! ```text
//! handler (destination string + RelayOptions)
//!     → client.rs (build reqwest client: timeout, redirect budget)
//!     → outbound GET, exactly one attempt
//!     → UpstreamResponse (status, headers, body, final URL)
//!       or RelayError (transport failure, message preserved)
//!     → handler shapes the result per endpoint
//! ```
//!
//! # Design Decisions
//! - The destination is passed to the HTTP client exactly as received:
//!   no allow-list, no deny-list, no scheme or address-range checks
//! - Non-2xx upstream statuses are relayed, not raised as errors
//! - Transport error messages are surfaced verbatim to the caller
//! - No retries, no caching: one call, one upstream request

pub mod client;
pub mod error;
pub mod types;

pub use client::fetch;
pub use error::RelayError;
pub use types::{BodyMode, RelayOptions, UpstreamResponse};
