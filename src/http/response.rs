//! Response records.
//!
//! Each endpoint returns one fixed-shape record. Keys are camelCase on the
//! wire and appear in field declaration order.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::config::AppConfig;
use crate::observability::process::MemoryUsage;

pub const HEALTHY: &str = "healthy";
pub const RUNNING: &str = "running";
pub const GREETING: &str = "Hello from Docker Practice App!";
pub const APPLICATION_NAME: &str = "docker-practice-app";

/// Current UTC time as ISO-8601 with millisecond precision, e.g.
/// `2024-01-01T12:00:00.000Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub environment: String,
    pub version: String,
    pub build_number: String,
}

impl HealthResponse {
    pub fn new(config: &AppConfig, timestamp: String) -> Self {
        Self {
            status: HEALTHY,
            timestamp,
            environment: config.environment.clone(),
            version: config.version.clone(),
            build_number: config.build_number.clone(),
        }
    }
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootResponse {
    pub message: &'static str,
    pub environment: String,
    pub version: String,
    pub build_number: String,
    pub port: u16,
    pub timestamp: String,
}

impl RootResponse {
    pub fn new(config: &AppConfig, timestamp: String) -> Self {
        Self {
            message: GREETING,
            environment: config.environment.clone(),
            version: config.version.clone(),
            build_number: config.build_number.clone(),
            port: config.port,
            timestamp,
        }
    }
}

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub application: &'static str,
    pub status: &'static str,
    pub environment: String,
    pub version: String,
    pub build_number: String,
    /// Seconds since process start.
    pub uptime: f64,
    pub memory: MemoryUsage,
    pub timestamp: String,
}

impl StatusResponse {
    pub fn new(config: &AppConfig, uptime: f64, memory: MemoryUsage, timestamp: String) -> Self {
        Self {
            application: APPLICATION_NAME,
            status: RUNNING,
            environment: config.environment.clone(),
            version: config.version.clone(),
            build_number: config.build_number.clone(),
            uptime,
            memory,
            timestamp,
        }
    }
}

/// Body returned for unmatched paths.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: &'static str,
    pub path: String,
}
