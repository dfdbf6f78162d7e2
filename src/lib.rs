//! Docker Practice App Library

pub mod cli;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::AppConfig;
pub use http::HttpServer;
pub use observability::process::{MemoryUsage, ProcessMetricsProvider, SystemMetrics};

// Heap counters in `observability::process` are read from this allocator.
#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;
