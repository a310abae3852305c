//! Theme provider and semantic color tokens
//!
//! The navigation chrome reads a closed set of semantic tokens (primary,
//! surface, outline, on-primary and a few status tones). A palette is either
//! one of the built-in themes or a custom token map validated at startup.
//!
//! # Usage
//!
//! ```rust
//! use app_ui::theme::{ThemeName, ThemeProvider, ThemeToken};
//!
//! let provider = ThemeProvider::new(ThemeName::Light);
//! let tokens = provider.tokens();
//! assert_eq!(tokens.get(ThemeToken::Primary), "#1565C0");
//!
//! provider.switch(ThemeName::Dark);
//! assert_eq!(provider.tokens().name(), Some(ThemeName::Dark));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigurationFault, Result};

// =============================================================================
// Color Types
// =============================================================================

/// A color represented as a hex string (e.g., "#1565C0")
pub type Color = String;

/// Parse a hex color string to RGB components
pub fn parse_hex_color(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Convert RGB to hex string
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02X}{:02X}{:02X}", r, g, b)
}

/// Brand colors of the application
pub mod brand {
    /// Primary brand blue (header, active tabs)
    pub const PRIMARY: &str = "#1565C0";

    /// Light tint of the brand blue
    pub const PRIMARY_LIGHT: &str = "#90CAF9";

    /// Deep shade of the brand blue
    pub const PRIMARY_DEEP: &str = "#0D47A1";

    /// Healthy / active status
    pub const GREEN: &str = "#4CAF50";

    /// Pending status
    pub const ORANGE: &str = "#FF9800";

    /// Informational status
    pub const BLUE: &str = "#2196F3";

    /// Pure white
    pub const WHITE: &str = "#FFFFFF";
}

// =============================================================================
// Tokens
// =============================================================================

/// Semantic theme tokens referenced by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeToken {
    /// Brand color: header background, active tab tint
    Primary,
    /// Content drawn on top of `Primary`
    OnPrimary,
    /// Tab bar background
    Surface,
    /// Borders and inactive tab tint
    Outline,
    /// Screen background
    Background,
    /// Healthy status tone
    Positive,
    /// Pending status tone
    Warning,
    /// Informational status tone
    Info,
}

impl ThemeToken {
    /// Every token, in declaration order
    pub const ALL: [ThemeToken; 8] = [
        ThemeToken::Primary,
        ThemeToken::OnPrimary,
        ThemeToken::Surface,
        ThemeToken::Outline,
        ThemeToken::Background,
        ThemeToken::Positive,
        ThemeToken::Warning,
        ThemeToken::Info,
    ];

    /// Token name as used in palette files
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeToken::Primary => "primary",
            ThemeToken::OnPrimary => "onPrimary",
            ThemeToken::Surface => "surface",
            ThemeToken::Outline => "outline",
            ThemeToken::Background => "background",
            ThemeToken::Positive => "positive",
            ThemeToken::Warning => "warning",
            ThemeToken::Info => "info",
        }
    }

    /// Look up a token by its palette name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.as_str() == name)
    }
}

impl std::fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme name enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    /// Light theme
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Light => write!(f, "Light"),
            ThemeName::Dark => write!(f, "Dark"),
        }
    }
}

impl std::str::FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(ThemeName::Light),
            "dark" => Ok(ThemeName::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

/// A complete set of token values
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTokens {
    /// Built-in theme this set came from, `None` for custom palettes
    #[serde(skip)]
    name: Option<ThemeName>,
    primary: Color,
    on_primary: Color,
    surface: Color,
    outline: Color,
    background: Color,
    positive: Color,
    warning: Color,
    info: Color,
}

impl ThemeTokens {
    /// The built-in palette for a theme
    pub fn builtin(name: ThemeName) -> Self {
        match name {
            ThemeName::Light => light_tokens(),
            ThemeName::Dark => dark_tokens(),
        }
    }

    /// Build a custom palette from token names to hex colors
    ///
    /// # Errors
    ///
    /// Every token must be present with a `#RRGGBB` value, and no names
    /// outside the token set are accepted.
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self> {
        if let Some(unknown) = map.keys().find(|name| ThemeToken::from_name(name).is_none()) {
            return Err(ConfigurationFault::UnknownThemeToken(unknown.clone()));
        }

        let color = |token: ThemeToken| -> Result<Color> {
            let value = map
                .get(token.as_str())
                .ok_or_else(|| ConfigurationFault::MissingThemeToken(token.to_string()))?;
            let (r, g, b) =
                parse_hex_color(value).ok_or_else(|| ConfigurationFault::InvalidThemeColor {
                    token: token.to_string(),
                    value: value.clone(),
                })?;
            Ok(rgb_to_hex(r, g, b))
        };

        Ok(Self {
            name: None,
            primary: color(ThemeToken::Primary)?,
            on_primary: color(ThemeToken::OnPrimary)?,
            surface: color(ThemeToken::Surface)?,
            outline: color(ThemeToken::Outline)?,
            background: color(ThemeToken::Background)?,
            positive: color(ThemeToken::Positive)?,
            warning: color(ThemeToken::Warning)?,
            info: color(ThemeToken::Info)?,
        })
    }

    /// Built-in theme name, if any
    pub fn name(&self) -> Option<ThemeName> {
        self.name
    }

    /// Value of a token
    pub fn get(&self, token: ThemeToken) -> &str {
        match token {
            ThemeToken::Primary => &self.primary,
            ThemeToken::OnPrimary => &self.on_primary,
            ThemeToken::Surface => &self.surface,
            ThemeToken::Outline => &self.outline,
            ThemeToken::Background => &self.background,
            ThemeToken::Positive => &self.positive,
            ThemeToken::Warning => &self.warning,
            ThemeToken::Info => &self.info,
        }
    }
}

fn light_tokens() -> ThemeTokens {
    ThemeTokens {
        name: Some(ThemeName::Light),
        primary: brand::PRIMARY.to_string(),
        on_primary: brand::WHITE.to_string(),
        surface: brand::WHITE.to_string(),
        outline: "#79747E".to_string(),
        background: "#F5F5F5".to_string(),
        positive: brand::GREEN.to_string(),
        warning: brand::ORANGE.to_string(),
        info: brand::BLUE.to_string(),
    }
}

fn dark_tokens() -> ThemeTokens {
    ThemeTokens {
        name: Some(ThemeName::Dark),
        primary: brand::PRIMARY_LIGHT.to_string(),
        on_primary: brand::PRIMARY_DEEP.to_string(),
        surface: "#1E1E1E".to_string(),
        outline: "#938F99".to_string(),
        background: "#121212".to_string(),
        positive: "#81C784".to_string(),
        warning: "#FFB74D".to_string(),
        info: "#64B5F6".to_string(),
    }
}

// =============================================================================
// Chrome Styles
// =============================================================================

/// Colors of the tab bar and header, derived from one token set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabBarStyle {
    /// Tint of the focused tab
    pub active_tint: Color,
    /// Tint of unfocused tabs
    pub inactive_tint: Color,
    /// Tab bar background
    pub background: Color,
    /// Border above the tab bar
    pub border_top: Color,
    /// Header background
    pub header_background: Color,
    /// Header title tint
    pub header_tint: Color,
}

impl TabBarStyle {
    /// Derive the chrome style from a token set
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        Self {
            active_tint: tokens.get(ThemeToken::Primary).to_string(),
            inactive_tint: tokens.get(ThemeToken::Outline).to_string(),
            background: tokens.get(ThemeToken::Surface).to_string(),
            border_top: tokens.get(ThemeToken::Outline).to_string(),
            header_background: tokens.get(ThemeToken::Primary).to_string(),
            header_tint: tokens.get(ThemeToken::OnPrimary).to_string(),
        }
    }
}

// =============================================================================
// Theme Provider
// =============================================================================

/// Single source of truth for the active token set
///
/// Clones share the same slot. Readers get an `Arc` snapshot, so a theme
/// switch replaces the whole set at once and never exposes a mix of old and
/// new values.
#[derive(Debug, Clone)]
pub struct ThemeProvider {
    current: Arc<RwLock<Arc<ThemeTokens>>>,
}

impl Default for ThemeProvider {
    fn default() -> Self {
        Self::new(ThemeName::default())
    }
}

impl ThemeProvider {
    /// Create a provider with a built-in theme
    pub fn new(name: ThemeName) -> Self {
        Self::from_tokens(ThemeTokens::builtin(name))
    }

    /// Create a provider with a validated token set
    pub fn from_tokens(tokens: ThemeTokens) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(tokens))),
        }
    }

    /// Snapshot of the active token set
    pub fn tokens(&self) -> Arc<ThemeTokens> {
        Arc::clone(&self.current.read())
    }

    /// Switch to a built-in theme
    pub fn switch(&self, name: ThemeName) {
        tracing::info!(theme = %name, "Switching theme");
        self.replace(ThemeTokens::builtin(name));
    }

    /// Replace the whole token set
    pub fn replace(&self, tokens: ThemeTokens) {
        *self.current.write() = Arc::new(tokens);
    }

    /// Chrome style for the active token set
    pub fn tab_bar_style(&self) -> TabBarStyle {
        TabBarStyle::from_tokens(&self.tokens())
    }
}
