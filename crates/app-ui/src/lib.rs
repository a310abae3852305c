//! User interface shell for Sperm Analyzer
//!
//! This crate provides the presentation layer without binding to a
//! rendering toolkit: the navigation shell, the theme provider, and the
//! home screen presenter.
//!
//! # Modules
//!
//! - [`navigation`] - Route registry, icon table and the tab navigation shell
//! - [`theme`] - Semantic color tokens and the theme provider
//! - [`presenter`] - Feature cards, status panel and informational dialogs
//! - [`error`] - Configuration faults and navigation errors
//!
//! # Example
//!
//! ```rust
//! use app_state::SessionStatus;
//! use app_ui::{FeaturePresenter, NavigationShell, RouteRegistry, ThemeName, ThemeProvider};
//! use i18n::{LocaleResolver, LocaleTable};
//!
//! let locale = LocaleResolver::new(LocaleTable::bundled("en").unwrap());
//! let shell = NavigationShell::mount(
//!     RouteRegistry::standard(),
//!     locale,
//!     ThemeProvider::new(ThemeName::Light),
//! )
//! .unwrap();
//!
//! let bar = shell.tab_bar();
//! assert_eq!(bar.tabs.len(), 5);
//!
//! let home = FeaturePresenter::new("1.0.0").home_view(shell.locale(), &SessionStatus::default());
//! assert_eq!(home.status.rows.len(), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod navigation;
pub mod presenter;
pub mod theme;

// Re-export commonly used types
pub use error::{ConfigurationFault, UnknownRouteError};

pub use navigation::{
    glyphs, Glyph, IconState, IconTable, MountedScreen, NavigationShell, Route, RouteId,
    RouteRegistry, ScreenTransition, Tab, TabBar,
};

pub use presenter::{
    ActionButton, FeatureCard, FeaturePresenter, HomeView, InfoAction, ModalMessage, StatusPanel,
    StatusRow, StatusTone,
};

pub use theme::{ThemeName, ThemeProvider, ThemeToken, ThemeTokens, TabBarStyle};
