//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, NODE_ENV, APP_VERSION, BUILD_NUMBER)
//!     → loader.rs (lookup & parse, fall back to defaults)
//!     → AppConfig (immutable snapshot)
//!     → shared via Arc with the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never mutated afterwards
//! - Every field has a default, so an empty environment is a valid config
//! - Handlers never touch the environment directly

pub mod loader;
pub mod schema;

pub use loader::ConfigError;
pub use schema::AppConfig;
