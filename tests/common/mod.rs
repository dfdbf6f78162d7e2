//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

use docker_practice_app::{AppConfig, HttpServer, ProcessMetricsProvider, SystemMetrics};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Start the server on an ephemeral loopback port with real process metrics.
#[allow(dead_code)]
pub async fn spawn_app(config: AppConfig) -> SocketAddr {
    spawn_app_with_metrics(config, Arc::new(SystemMetrics::new(Instant::now()))).await
}

/// Start the server on an ephemeral loopback port with the given metrics source.
#[allow(dead_code)]
pub async fn spawn_app_with_metrics(
    config: AppConfig,
    metrics: Arc<dyn ProcessMetricsProvider>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config, metrics);

    tokio::spawn(async move {
        server.run(listener).await.expect("server run");
    });

    addr
}

pub fn base_url(addr: SocketAddr) -> String {
    format!("http://{}", addr)
}

/// Start a stub that answers every request with `200 OK` and a fixed JSON body.
#[allow(dead_code)]
pub async fn start_stub_backend(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 1024];
                let _ = socket.read(&mut buf).await;
                let response = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}
