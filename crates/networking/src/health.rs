//! Backend health probe
//!
//! The analysis backend exposes `GET /api/v1/health`. Any 2xx answer means
//! the backend is reachable; everything else, including transport errors and
//! timeouts, means it is not.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;

/// Default health endpoint path
pub const DEFAULT_HEALTH_PATH: &str = "/api/v1/health";

/// Result type for health checks
pub type Result<T> = std::result::Result<T, HealthError>;

/// Health check errors
#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    /// Request could not be sent or timed out
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("Backend unhealthy: HTTP {0}")]
    Status(u16),
}

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the HTTP health probe
#[derive(Debug, Clone)]
pub struct HealthProbeConfig {
    /// Base backend URL (e.g., "http://localhost:8000")
    pub base_url: String,
    /// Health endpoint path
    pub health_path: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for HealthProbeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            timeout: Duration::from_secs(5),
            user_agent: format!("SpermAnalyzer/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HealthProbeConfig {
    /// Create a new config with a backend URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the health endpoint path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.health_path = path.into();
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL of the health endpoint
    pub fn health_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = self.health_path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

// =============================================================================
// Probe
// =============================================================================

/// Checks whether the analysis backend is reachable
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthProbe: Send + Sync {
    /// Perform one health check
    async fn check(&self) -> Result<()>;
}

/// Health probe over HTTP
#[derive(Debug, Clone)]
pub struct HttpHealthProbe {
    client: ReqwestClient,
    url: String,
}

impl HttpHealthProbe {
    /// Create a probe
    ///
    /// # Errors
    ///
    /// Fails when the HTTP client cannot be built (e.g. TLS backend errors).
    pub fn new(config: &HealthProbeConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            url: config.health_url(),
        })
    }

    /// URL this probe checks
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HealthProbe for HttpHealthProbe {
    async fn check(&self) -> Result<()> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(HealthError::Status(status.as_u16()))
        }
    }
}
