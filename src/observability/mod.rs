//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! logging.rs  → console log events (tracing fmt layer)
//! process.rs  → uptime and memory usage for /api/status
//! ```
//!
//! Per-request spans are created by the HTTP middleware in
//! `http::request` and carry the request ID.

pub mod logging;
pub mod process;
