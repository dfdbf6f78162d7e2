//! Route handlers.
//!
//! Every handler is a projection of the config snapshot (and for
//! `/api/status`, live process metrics) into a response record. Query
//! strings and bodies are ignored.

use axum::{extract::State, http::StatusCode, http::Uri, Json};

use crate::http::response::{
    timestamp_now, ErrorResponse, HealthResponse, RootResponse, StatusResponse,
};
use crate::http::server::AppState;

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new(&state.config, timestamp_now()))
}

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse::new(&state.config, timestamp_now()))
}

/// `GET /api/status`
pub async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let uptime = state.metrics.uptime();
    let memory = state.metrics.memory_usage();
    tracing::debug!(uptime, rss = memory.rss, "Status requested");

    Json(StatusResponse::new(&state.config, uptime, memory, timestamp_now()))
}

/// Fallback for unmatched paths.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not Found",
            path: uri.path().to_string(),
        }),
    )
}
