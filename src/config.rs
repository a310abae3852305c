//! Shell configuration
//!
//! Read once at startup from a camelCase JSON file. Every field is optional;
//! an absent file means defaults.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use app_ui::{ConfigurationFault, ThemeName, ThemeTokens};
use networking::health::DEFAULT_HEALTH_PATH;
use networking::HealthProbeConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable naming the configuration file
pub const CONFIG_ENV: &str = "SPERM_ANALYZER_CONFIG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Cannot read config file {path}: {source}")]
    Io {
        /// File that was being read
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid configuration JSON
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A field has an unusable value
    #[error("Invalid config value for `{field}`: {reason}")]
    InvalidValue {
        /// Field name as written in the file
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type for configuration loading
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Startup configuration of the shell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShellConfig {
    /// Language to start in
    pub language: String,
    /// Fallback language; must have a bundle
    pub default_language: String,
    /// Built-in palette
    pub theme: ThemeName,
    /// Custom palette replacing the built-in one, token name to `#RRGGBB`
    pub custom_theme: Option<HashMap<String, String>>,
    /// Analysis backend base URL
    pub backend_url: String,
    /// Health endpoint path on the backend
    pub health_path: String,
    /// Health request timeout in seconds
    pub health_timeout_secs: u64,
    /// Seconds between health checks
    pub health_interval_secs: u64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            default_language: "en".to_string(),
            theme: ThemeName::Light,
            custom_theme: None,
            backend_url: "http://localhost:8000".to_string(),
            health_path: DEFAULT_HEALTH_PATH.to_string(),
            health_timeout_secs: 5,
            health_interval_secs: 30,
        }
    }
}

impl ShellConfig {
    /// Parse configuration from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Read the file named by [`CONFIG_ENV`], or use defaults when unset
    pub fn load_from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::info!(path = ?path, "Loading configuration");
                Self::from_file(path)
            }
            None => {
                tracing::debug!("{} not set, using default configuration", CONFIG_ENV);
                Ok(Self::default())
            }
        }
    }

    /// Check field values; run by the parsers, call it on hand-built configs
    pub fn validate(&self) -> Result<()> {
        if self.health_interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "healthIntervalSecs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.health_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "healthTimeoutSecs",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.backend_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "backendUrl",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The palette to start with: the custom one if given, else the built-in
    pub fn theme_tokens(&self) -> std::result::Result<ThemeTokens, ConfigurationFault> {
        match &self.custom_theme {
            Some(map) => ThemeTokens::from_map(map),
            None => Ok(ThemeTokens::builtin(self.theme)),
        }
    }

    /// Health probe settings
    pub fn probe_config(&self) -> HealthProbeConfig {
        HealthProbeConfig::new(self.backend_url.clone())
            .with_path(self.health_path.clone())
            .with_timeout(Duration::from_secs(self.health_timeout_secs.max(1)))
    }

    /// Time between health checks, never less than one second
    pub fn health_interval(&self) -> Duration {
        Duration::from_secs(self.health_interval_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_ui::ThemeToken;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::default();
        assert_eq!(config.language, "en");
        assert_eq!(config.theme, ThemeName::Light);
        assert_eq!(
            config.probe_config().health_url(),
            "http://localhost:8000/api/v1/health"
        );
        assert_eq!(config.health_interval(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = ShellConfig::from_json_str(r#"{"language":"ar","theme":"dark"}"#).unwrap();
        assert_eq!(config.language, "ar");
        assert_eq!(config.default_language, "en");
        assert_eq!(config.theme, ThemeName::Dark);
        assert_eq!(config.health_timeout_secs, 5);
    }

    #[test]
    fn test_invalid_json() {
        let err = ShellConfig::from_json_str("{language: ar}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));

        let err = ShellConfig::from_json_str(r#"{"theme":"sepia"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let err = ShellConfig::from_json_str(r#"{"healthIntervalSecs":0}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "healthIntervalSecs",
                ..
            }
        ));
    }

    #[test]
    fn test_hand_built_zero_durations() {
        let config = ShellConfig {
            health_interval_secs: 0,
            health_timeout_secs: 0,
            ..Default::default()
        };

        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "healthIntervalSecs",
                ..
            })
        ));
        assert_eq!(config.health_interval(), Duration::from_secs(1));
        assert_eq!(config.probe_config().timeout, Duration::from_secs(1));
    }

    #[test]
    fn test_custom_theme() {
        let json = r##"{
            "customTheme": {
                "primary": "#004d40", "onPrimary": "#ffffff", "surface": "#ffffff",
                "outline": "#79747e", "background": "#f5f5f5", "positive": "#4caf50",
                "warning": "#ff9800", "info": "#2196f3"
            }
        }"##;
        let tokens = ShellConfig::from_json_str(json).unwrap().theme_tokens().unwrap();
        assert_eq!(tokens.get(ThemeToken::Primary), "#004D40");
        assert_eq!(tokens.name(), None);
    }

    #[test]
    fn test_custom_theme_missing_token() {
        let json = r##"{"customTheme": {"primary": "#004d40"}}"##;
        let err = ShellConfig::from_json_str(json).unwrap().theme_tokens().unwrap_err();
        assert!(matches!(err, ConfigurationFault::MissingThemeToken(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"backendUrl":"http://10.0.2.2:8000"}}"#).unwrap();

        let config = ShellConfig::from_file(file.path()).unwrap();
        assert_eq!(config.backend_url, "http://10.0.2.2:8000");
    }

    #[test]
    fn test_missing_file() {
        let err = ShellConfig::from_file("/nonexistent/sperm-analyzer.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
