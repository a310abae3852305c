//! Sperm Analyzer application shell
//!
//! Composes the workspace crates into a runnable shell:
//!
//! - [`config`] - Startup configuration (`SPERM_ANALYZER_CONFIG`)
//! - [`app`] - Bootstrap and event dispatch
//! - [`console`] - Text commands and rendering for the interactive binary
//!
//! # Example
//!
//! ```rust
//! use sperm_analyzer::{App, Outcome, ShellConfig, ShellEvent};
//!
//! let mut app = App::new(&ShellConfig::default()).unwrap();
//! let outcome = app.dispatch(ShellEvent::Select("Graphs".into())).unwrap();
//! assert!(matches!(outcome, Outcome::Navigated(_)));
//! assert_eq!(app.tab_bar().header_title, "Graphs");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod console;

pub use app::{App, Outcome, ShellEvent, APP_VERSION};
pub use config::{ConfigError, ShellConfig, CONFIG_ENV};
pub use console::{parse_command, Command, CommandError};
