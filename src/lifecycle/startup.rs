//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration from the environment
//! - Initialize the process metrics provider
//! - Bind the listener and begin accepting traffic
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, after config is known good

use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::http::{HttpServer, ServerError};
use crate::observability::process::SystemMetrics;

/// Load config from the environment, bind, and serve until terminated.
///
/// `started_at` is the instant uptime is measured from.
pub async fn start(started_at: Instant) -> Result<(), ServerError> {
    let config = AppConfig::from_env()?;

    tracing::debug!(
        environment = %config.environment,
        version = %config.version,
        build_number = %config.build_number,
        port = config.port,
        "Configuration loaded"
    );

    let server = HttpServer::new(config, Arc::new(SystemMetrics::new(started_at)));
    let listener = server.bind().await?;
    server.run(listener).await
}
