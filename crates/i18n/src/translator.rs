//! Translation tables and locale resolution
//!
//! A [`LocaleTable`] holds one Fluent bundle per supported language and is
//! loaded once at startup. A [`LocaleResolver`] wraps the table together
//! with the active language and turns message keys into display strings.

use std::collections::HashMap;

use fluent::{FluentBundle, FluentResource};
use unic_langid::LanguageIdentifier;

use crate::lang::{negotiate, parse_language, TextDirection};
use crate::{I18nError, Result};

const EN_FTL: &str = include_str!("../locales/en.ftl");
const AR_FTL: &str = include_str!("../locales/ar.ftl");

// =============================================================================
// Locale Table
// =============================================================================

/// Immutable mapping from `(message key, language)` to display text
pub struct LocaleTable {
    /// Supported languages in declaration order
    languages: Vec<LanguageIdentifier>,
    /// Fallback language for unsupported requests
    default_language: LanguageIdentifier,
    /// One bundle per supported language
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
}

impl std::fmt::Debug for LocaleTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleTable")
            .field("languages", &self.languages)
            .field("default_language", &self.default_language)
            .finish_non_exhaustive()
    }
}

impl LocaleTable {
    /// Build a table from `(language code, Fluent source)` pairs
    ///
    /// # Errors
    ///
    /// Fails when a tag or resource is invalid, a language appears twice,
    /// or `default_language` is not among the sources.
    pub fn from_sources(default_language: &str, sources: &[(&str, &str)]) -> Result<Self> {
        let mut languages = Vec::with_capacity(sources.len());
        let mut bundles = HashMap::with_capacity(sources.len());

        for (code, source) in sources {
            let language = parse_language(code)?;
            if bundles.contains_key(&language) {
                return Err(I18nError::DuplicateLanguage(language.to_string()));
            }

            let resource = FluentResource::try_new(source.to_string()).map_err(|(_, errors)| {
                I18nError::InvalidResource {
                    language: language.to_string(),
                    details: format!("{errors:?}"),
                }
            })?;

            let mut bundle = FluentBundle::new(vec![language.clone()]);
            // Isolation marks would leak into plain-text rendering
            bundle.set_use_isolating(false);
            bundle
                .add_resource(resource)
                .map_err(|errors| I18nError::InvalidResource {
                    language: language.to_string(),
                    details: format!("{errors:?}"),
                })?;

            languages.push(language.clone());
            bundles.insert(language, bundle);
        }

        let default_language = parse_language(default_language)?;
        if !bundles.contains_key(&default_language) {
            return Err(I18nError::UnsupportedDefault(default_language.to_string()));
        }

        tracing::debug!(
            languages = ?languages.iter().map(|l| l.to_string()).collect::<Vec<_>>(),
            default = %default_language,
            "Loaded locale table"
        );

        Ok(Self {
            languages,
            default_language,
            bundles,
        })
    }

    /// Load the translations shipped with the application (English, Arabic)
    pub fn bundled(default_language: &str) -> Result<Self> {
        Self::from_sources(default_language, &[("en", EN_FTL), ("ar", AR_FTL)])
    }

    /// Supported languages in declaration order
    pub fn languages(&self) -> &[LanguageIdentifier] {
        &self.languages
    }

    /// The fallback language
    pub fn default_language(&self) -> &LanguageIdentifier {
        &self.default_language
    }

    /// Check if a language has its own bundle
    pub fn is_supported(&self, language: &LanguageIdentifier) -> bool {
        self.bundles.contains_key(language)
    }

    /// Format a message in exactly one language, without fallback
    ///
    /// Returns `None` for unknown languages, missing keys and messages
    /// without a value.
    pub fn lookup(&self, key: &str, language: &LanguageIdentifier) -> Option<String> {
        let bundle = self.bundles.get(language)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let text = bundle.format_pattern(pattern, None, &mut errors);
        if !errors.is_empty() {
            tracing::warn!(key, language = %language, ?errors, "Message formatted with errors");
        }
        Some(text.into_owned())
    }

    /// Verify every key resolves to non-empty text in every language
    ///
    /// # Errors
    ///
    /// Reports the first `(key, language)` pair with no usable message.
    pub fn require<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Result<()> {
        for key in keys {
            for language in &self.languages {
                let present = self
                    .lookup(key, language)
                    .is_some_and(|text| !text.trim().is_empty());
                if !present {
                    return Err(I18nError::MissingTranslation {
                        key: key.to_string(),
                        language: language.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Locale Resolver
// =============================================================================

/// Resolves message keys against a [`LocaleTable`] for an active language
#[derive(Debug)]
pub struct LocaleResolver {
    table: LocaleTable,
    active: LanguageIdentifier,
}

impl LocaleResolver {
    /// Create a resolver using the table's default language
    pub fn new(table: LocaleTable) -> Self {
        let active = table.default_language().clone();
        Self { table, active }
    }

    /// Create a resolver and activate `code` (negotiated, see [`Self::set_language`])
    pub fn with_language(table: LocaleTable, code: &str) -> Self {
        let mut resolver = Self::new(table);
        resolver.set_language(code);
        resolver
    }

    /// The underlying table
    pub fn table(&self) -> &LocaleTable {
        &self.table
    }

    /// Map a requested language code to the supported language that serves it
    ///
    /// Unparseable or unsupported codes degrade to the default language.
    pub fn language_for(&self, code: &str) -> &LanguageIdentifier {
        let Ok(requested) = parse_language(code) else {
            tracing::warn!(code, "Unparseable language code, using default");
            return self.table.default_language();
        };

        match negotiate(&requested, self.table.languages()) {
            Some(language) => language,
            None => {
                tracing::warn!(code, "Unsupported language code, using default");
                self.table.default_language()
            }
        }
    }

    /// Resolve a key for a language code
    ///
    /// Falls back to the default language when the code is unsupported or
    /// the message is missing there. A key missing everywhere resolves to
    /// itself; startup validation through [`Self::require`] keeps that from
    /// happening for declared keys.
    pub fn resolve(&self, key: &str, code: &str) -> String {
        let language = self.language_for(code);
        self.resolve_in(key, language)
    }

    fn resolve_in(&self, key: &str, language: &LanguageIdentifier) -> String {
        if let Some(text) = self.table.lookup(key, language) {
            return text;
        }
        if language != self.table.default_language() {
            if let Some(text) = self.table.lookup(key, self.table.default_language()) {
                tracing::debug!(key, language = %language, "Message missing, using default language");
                return text;
            }
        }
        tracing::warn!(key, "No translation for key");
        key.to_string()
    }

    /// Text direction for a language code (after negotiation)
    pub fn direction(&self, code: &str) -> TextDirection {
        TextDirection::of(self.language_for(code))
    }

    /// Change the active language, returning its text direction
    ///
    /// An unsupported code activates the default language and logs a warning.
    pub fn set_language(&mut self, code: &str) -> TextDirection {
        let language = self.language_for(code).clone();
        tracing::info!(language = %language, "Active language changed");
        self.active = language;
        self.active_direction()
    }

    /// The active language
    pub fn active_language(&self) -> &LanguageIdentifier {
        &self.active
    }

    /// Text direction of the active language
    pub fn active_direction(&self) -> TextDirection {
        TextDirection::of(&self.active)
    }

    /// Resolve a key in the active language
    pub fn label(&self, key: &str) -> String {
        self.resolve_in(key, &self.active)
    }

    /// Startup completeness check, see [`LocaleTable::require`]
    pub fn require<'k>(&self, keys: impl IntoIterator<Item = &'k str>) -> Result<()> {
        self.table.require(keys)
    }
}
