//! Internationalization for Sperm Analyzer
//!
//! This crate provides i18n support with translation loading,
//! language negotiation, text direction, and message formatting.
//!
//! Translations are Fluent resources, one per language. The bundled set
//! covers English and Arabic; Arabic is laid out right-to-left.
//!
//! ```rust
//! use i18n::{LocaleResolver, LocaleTable, TextDirection};
//!
//! let table = LocaleTable::bundled("en").unwrap();
//! let resolver = LocaleResolver::new(table);
//! assert_eq!(resolver.resolve("navigation-home", "en"), "Home");
//! assert_eq!(resolver.direction("ar"), TextDirection::Rtl);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod lang;
pub mod translator;

pub use lang::{negotiate, parse_language, TextDirection};
pub use translator::{LocaleResolver, LocaleTable};
pub use unic_langid::LanguageIdentifier;

/// Result type for i18n operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Errors raised while loading or validating translations
///
/// All of these are configuration problems detected at startup. Runtime
/// lookups never fail; they degrade to the default language instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// A language tag could not be parsed
    #[error("Invalid language tag: {0}")]
    InvalidLanguageTag(String),

    /// A Fluent resource failed to parse or register
    #[error("Invalid translation resource for `{language}`: {details}")]
    InvalidResource {
        /// Language the resource was declared for
        language: String,
        /// Parser or bundle diagnostics
        details: String,
    },

    /// The same language was registered twice
    #[error("Duplicate translation resource for `{0}`")]
    DuplicateLanguage(String),

    /// The configured default language has no resource
    #[error("Default language `{0}` has no translations")]
    UnsupportedDefault(String),

    /// A required key has no (non-empty) message in a supported language
    #[error("Missing translation for `{key}` in `{language}`")]
    MissingTranslation {
        /// Message key
        key: String,
        /// Language lacking the message
        language: String,
    },
}
