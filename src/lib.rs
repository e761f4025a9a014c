//! Bluejays Storefront API
//!
//! A demonstration storefront backend built with Tokio and Axum. Its core
//! is an outbound fetch relay: endpoints that accept a caller-supplied URL,
//! issue a server-side GET to it with no destination restriction, and relay
//! the result back. Built for controlled training and testing environments.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │              STOREFRONT API                   │
//!                        │                                               │
//!   Client Request       │  ┌─────────┐    ┌──────────┐    ┌─────────┐  │
//!   ─────────────────────┼─▶│  http   │───▶│ handlers │───▶│  relay  │──┼──▶ Any
//!                        │  │ server  │    │ (shaping)│    │ (fetch) │  │    destination
//!                        │  └─────────┘    └────┬─────┘    └─────────┘  │
//!                        │                      │                        │
//!                        │                      ▼                        │
//!                        │                ┌──────────┐                   │
//!                        │                │ catalog  │                   │
//!                        │                └──────────┘                   │
//!                        │                                               │
//!                        │  ┌─────────────────────────────────────────┐ │
//!                        │  │          Cross-Cutting Concerns          │ │
//!                        │  │  ┌────────┐ ┌─────────────┐ ┌─────────┐ │ │
//!                        │  │  │ config │ │observability│ │lifecycle│ │ │
//!                        │  │  └────────┘ └─────────────┘ └─────────┘ │ │
//!                        │  └─────────────────────────────────────────┘ │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! The relay performs exactly one outbound GET per invocation, bounded by a
//! timeout and a redirect budget, and otherwise forwards the destination to
//! the HTTP client exactly as received.

// Core subsystems
pub mod catalog;
pub mod config;
pub mod http;
pub mod relay;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::StoreConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
