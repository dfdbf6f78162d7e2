//! Typed client for the Docker Practice App HTTP API.

mod client;

pub use client::{
    AppClient, ClientError, HealthResponse, MemoryUsage, RootResponse, StatusResponse,
};
