//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the three application routes
//! - Wire up middleware (request ID, tracing)
//! - Bind the listener and serve until the process is terminated

use std::sync::Arc;

use axum::{routing::get, Router};
use thiserror::Error;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, ConfigError};
use crate::http::handlers;
use crate::http::request::{make_request_span, request_id_header, UuidRequestId};
use crate::observability::process::ProcessMetricsProvider;

/// Error type for server startup and serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: Arc<dyn ProcessMetricsProvider>,
}

/// HTTP server for the application.
pub struct HttpServer {
    router: Router,
    config: Arc<AppConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and metrics source.
    pub fn new(config: AppConfig, metrics: Arc<dyn ProcessMetricsProvider>) -> Self {
        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            metrics,
        };

        Self {
            router: Self::build_router(state),
            config,
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id_header(), UuidRequestId))
            .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
            .layer(PropagateRequestIdLayer::new(request_id_header()));

        Router::new()
            .route("/health", get(handlers::health))
            .route("/", get(handlers::root))
            .route("/api/status", get(handlers::status))
            .fallback(handlers::not_found)
            .with_state(state)
            .layer(middleware)
    }

    /// Bind a listener on the configured address.
    pub async fn bind(&self) -> Result<TcpListener, ServerError> {
        let address = self.config.bind_address();
        TcpListener::bind(&address)
            .await
            .map_err(|source| ServerError::Bind { address, source })
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), ServerError> {
        let addr = listener.local_addr().map_err(ServerError::Serve)?;

        tracing::info!("Server running on port {}", addr.port());
        tracing::info!("Environment: {}", self.config.environment);
        tracing::info!("Version: {}", self.config.version);
        tracing::info!("Build: {}", self.config.build_number);

        axum::serve(listener, self.router)
            .await
            .map_err(ServerError::Serve)?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// A clone of the router, for driving requests without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
