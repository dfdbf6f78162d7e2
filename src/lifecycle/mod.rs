//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Initialize metrics → Bind listener → Serve
//! ```
//!
//! The process runs until it receives a termination signal; there is no
//! drain phase.

pub mod startup;
