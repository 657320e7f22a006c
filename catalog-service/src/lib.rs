//! Product catalog HTTP service

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// In-memory product catalog and CDN URL resolution
pub mod catalog;

/// Artificial latency and error injection
pub mod fault_injection;

/// Tracing subscriber setup
pub mod logging;

/// HTTP routes
pub mod routes;

/// Router assembly and server bootstrap
pub mod server;

/// Configuration and error types
pub mod types;
