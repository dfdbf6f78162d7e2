//! `app-cli` command behavior against live and stub servers.

use clap::Parser;
use docker_practice_app::cli::{run, Cli, CliError};
use docker_practice_app::AppConfig;

mod common;

fn parse(url: &str, command: &str) -> Cli {
    Cli::try_parse_from(["app-cli", "--url", url, command]).unwrap()
}

#[tokio::test]
async fn health_succeeds_against_running_service() {
    let addr = common::spawn_app(AppConfig::default()).await;
    let url = common::base_url(addr);

    for command in ["health", "info", "status"] {
        run(&parse(&url, command)).await.unwrap();
    }
}

#[tokio::test]
async fn health_fails_when_service_unreachable() {
    // Bind then drop to get a loopback port nothing listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = run(&parse(&common::base_url(addr), "health")).await.unwrap_err();
    assert!(matches!(err, CliError::Client(_)), "{err}");
}

#[tokio::test]
async fn health_fails_when_service_degraded() {
    let addr = common::start_stub_backend(
        r#"{"status":"degraded","timestamp":"2024-01-01T00:00:00.000Z","environment":"development","version":"1.0.0","buildNumber":"unknown"}"#,
    )
    .await;

    let err = run(&parse(&common::base_url(addr), "health")).await.unwrap_err();
    match err {
        CliError::Unhealthy(status) => assert_eq!(status, "degraded"),
        other => panic!("expected unhealthy, got {other}"),
    }
}
