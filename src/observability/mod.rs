//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and subsystems produce:
//!     → tracing events (structured fields per relay invocation)
//!
//! logging.rs installs the subscriber:
//!     → JSON formatter (production) or pretty formatter (development)
//!     → stdout
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing
//! - Request ID flows from middleware into handler log fields
//! - Log emission never returns errors to handlers and never blocks the
//!   caller beyond the write itself

pub mod logging;
