//! Language tags, negotiation and text direction

use fluent_langneg::{negotiate_languages, NegotiationStrategy};
use serde::{Deserialize, Serialize};
use unic_langid::{CharacterDirection, LanguageIdentifier};

use crate::{I18nError, Result};

/// Layout direction implied by a language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    /// Left-to-right
    #[default]
    Ltr,
    /// Right-to-left (mirrored layout)
    Rtl,
}

impl TextDirection {
    /// Direction of the script a language is written in
    pub fn of(language: &LanguageIdentifier) -> Self {
        match language.character_direction() {
            CharacterDirection::RTL => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// Check if this direction requires a mirrored layout
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

impl std::fmt::Display for TextDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextDirection::Ltr => write!(f, "ltr"),
            TextDirection::Rtl => write!(f, "rtl"),
        }
    }
}

/// Parse a BCP-47 language tag such as `en`, `ar` or `ar-EG`
pub fn parse_language(code: &str) -> Result<LanguageIdentifier> {
    code.trim()
        .parse::<LanguageIdentifier>()
        .map_err(|_| I18nError::InvalidLanguageTag(code.to_string()))
}

/// Pick the best supported language for a requested one
///
/// Region and script subtags are matched loosely, so `ar-EG` negotiates to
/// `ar` and `en` to `en-US` when only those are available. Returns `None`
/// when nothing matches.
pub fn negotiate<'a>(
    requested: &LanguageIdentifier,
    supported: &'a [LanguageIdentifier],
) -> Option<&'a LanguageIdentifier> {
    negotiate_languages(
        std::slice::from_ref(requested),
        supported,
        None,
        NegotiationStrategy::Filtering,
    )
    .into_iter()
    .next()
}
