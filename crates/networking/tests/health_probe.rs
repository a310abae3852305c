//! Integration tests for the HTTP health probe
//!
//! These tests use wiremock to stand in for the analysis backend and check
//! how its answers end up in the session status.

use std::sync::Arc;
use std::time::Duration;

use app_state::{BackendConnection, ModelReadiness, SessionStatusStore};
use networking::{ConnectivityMonitor, HealthError, HealthProbe, HealthProbeConfig, HttpHealthProbe};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn probe_for(server: &MockServer) -> HttpHealthProbe {
    let config = HealthProbeConfig::new(server.uri()).with_timeout(Duration::from_millis(500));
    HttpHealthProbe::new(&config).unwrap()
}

#[tokio::test]
async fn test_healthy_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"status":"healthy"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let probe = probe_for(&server);
    assert_eq!(probe.url(), format!("{}/api/v1/health", server.uri()));
    assert!(probe.check().await.is_ok());
}

#[tokio::test]
async fn test_unhealthy_backend() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = probe_for(&server).check().await.unwrap_err();
    assert!(matches!(err, HealthError::Status(503)));
}

#[tokio::test]
async fn test_missing_endpoint_is_unhealthy() {
    let server = MockServer::start().await;

    let err = probe_for(&server).check().await.unwrap_err();
    assert!(matches!(err, HealthError::Status(404)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let err = probe_for(&server).check().await.unwrap_err();
    assert!(matches!(err, HealthError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_backend() {
    let config = HealthProbeConfig::new("http://127.0.0.1:9").with_timeout(Duration::from_millis(500));
    let probe = HttpHealthProbe::new(&config).unwrap();

    assert!(matches!(probe.check().await, Err(HealthError::Transport(_))));
}

#[tokio::test]
async fn test_monitor_publishes_connectivity() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let store = SessionStatusStore::new();
    let monitor = ConnectivityMonitor::new(Arc::new(probe_for(&server)), store.clone());

    assert_eq!(monitor.refresh().await, BackendConnection::Connected);

    let status = store.snapshot();
    assert_eq!(status.backend_connected, BackendConnection::Connected);
    assert_eq!(status.models_ready, ModelReadiness::Pending);
    assert!(status.client_active);
}

#[tokio::test]
async fn test_monitor_reports_outage() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = SessionStatusStore::new();
    let monitor = ConnectivityMonitor::new(Arc::new(probe_for(&server)), store.clone());

    assert_eq!(monitor.refresh().await, BackendConnection::Connected);
    assert_eq!(monitor.refresh().await, BackendConnection::Disconnected);
    assert_eq!(store.snapshot().backend_connected, BackendConnection::Disconnected);
}
