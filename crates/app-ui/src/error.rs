//! Error types for the navigation shell

use i18n::I18nError;

/// Result type for shell construction
pub type Result<T> = std::result::Result<T, ConfigurationFault>;

/// A startup-time configuration problem
///
/// Any of these prevents the shell from mounting. They are never produced
/// once the shell is interactive.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationFault {
    /// The route registry declares no routes
    #[error("Route registry is empty")]
    EmptyRegistry,

    /// Two routes share an identity
    #[error("Duplicate route identity: {0}")]
    DuplicateRoute(String),

    /// A route is missing its identity, icon key or label key
    #[error("Route `{route}` has an empty {field}")]
    IncompleteRoute {
        /// Route identity (may be empty)
        route: String,
        /// Name of the empty field
        field: &'static str,
    },

    /// A chrome token is absent from a palette
    #[error("Theme token `{0}` is not defined")]
    MissingThemeToken(String),

    /// A palette defines a token outside the closed token set
    #[error("Unknown theme token: {0}")]
    UnknownThemeToken(String),

    /// A token value is not a `#RRGGBB` color
    #[error("Theme token `{token}` has invalid color `{value}`")]
    InvalidThemeColor {
        /// Token name
        token: String,
        /// Offending value
        value: String,
    },

    /// Translation data is invalid or incomplete
    #[error(transparent)]
    Locale(#[from] I18nError),
}

/// `select` was called with an identity absent from the registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown route: {0}")]
pub struct UnknownRouteError(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConfigurationFault::DuplicateRoute("Home".to_string()).to_string(),
            "Duplicate route identity: Home"
        );
        assert_eq!(
            UnknownRouteError("doesNotExist".to_string()).to_string(),
            "Unknown route: doesNotExist"
        );
    }

    #[test]
    fn test_locale_errors_pass_through() {
        let fault: ConfigurationFault = I18nError::MissingTranslation {
            key: "navigation-home".to_string(),
            language: "ar".to_string(),
        }
        .into();
        assert_eq!(fault.to_string(), "Missing translation for `navigation-home` in `ar`");
    }
}
