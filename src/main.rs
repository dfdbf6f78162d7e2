//! Docker Practice App
//!
//! A small HTTP service reporting its build metadata and runtime metrics.
//!
//! ```text
//! GET /            greeting + config snapshot
//! GET /health      liveness probe
//! GET /api/status  uptime and memory usage
//! ```

use std::time::Instant;

use docker_practice_app::{lifecycle, observability};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started_at = Instant::now();

    observability::logging::init_tracing();

    tracing::info!(
        "{} v{} starting",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );

    if let Err(e) = lifecycle::startup::start(started_at).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    Ok(())
}
