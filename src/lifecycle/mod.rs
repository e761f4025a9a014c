//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to subscribers → serve loop drains and exits
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl+C) → graceful shutdown
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
