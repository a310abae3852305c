//! Backend connectivity wired into a running shell

use std::sync::Arc;
use std::time::Duration;

use app_state::BackendConnection;
use networking::{ConnectivityMonitor, HttpHealthProbe};
use sperm_analyzer::{App, ShellConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> ShellConfig {
    ShellConfig {
        backend_url: server.uri(),
        health_timeout_secs: 1,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_healthy_backend_shows_connected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let app = App::new(&config).unwrap();
    let probe = HttpHealthProbe::new(&config.probe_config()).unwrap();
    let monitor = ConnectivityMonitor::new(Arc::new(probe), app.status_store().clone());

    assert_eq!(monitor.refresh().await, BackendConnection::Connected);
    assert_eq!(app.home_view().status.rows[2].value, "✅ Connected");
    // Connectivity says nothing about the models
    assert_eq!(app.home_view().status.rows[1].value, "🟡 Loading");
}

#[tokio::test]
async fn test_custom_health_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/healthz"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let config = ShellConfig {
        health_path: "/healthz".to_string(),
        ..config_for(&server)
    };
    let app = App::new(&config).unwrap();
    let probe = HttpHealthProbe::new(&config.probe_config()).unwrap();
    let monitor = ConnectivityMonitor::new(Arc::new(probe), app.status_store().clone());

    assert_eq!(monitor.refresh().await, BackendConnection::Connected);
}

#[tokio::test]
async fn test_failing_backend_shows_connect_required() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let app = App::new(&config).unwrap();
    let probe = HttpHealthProbe::new(&config.probe_config()).unwrap();
    let monitor = ConnectivityMonitor::new(Arc::new(probe), app.status_store().clone());

    let mut updates = app.status_store().subscribe();
    let handle = tokio::spawn(monitor.run(Duration::from_secs(60)));

    // Wait for the first check to settle
    loop {
        updates.changed().await.unwrap();
        if updates.borrow().backend_connected == BackendConnection::Disconnected {
            break;
        }
    }
    handle.abort();

    assert_eq!(app.home_view().status.rows[2].value, "🔄 Connect Required");
}
