//! Line-oriented text front-end
//!
//! Parses typed commands into [`ShellEvent`]s and renders the shell's view
//! models as plain text.

use std::fmt::Write as _;

use app_ui::{HomeView, InfoAction, ModalMessage, StatusPanel, TabBar, ThemeName};
use thiserror::Error;

use crate::app::ShellEvent;

/// Usage text for the interactive loop
pub const HELP: &str = "\
Commands:
  tab <route>      switch tab (Home, Camera, Analysis, Graphs, Settings)
  lang <code>      switch language (en, ar)
  theme <name>     switch theme (light, dark)
  home             show the home screen
  demo             open the analysis demo dialog
  features         open the feature list dialog
  status           show the system status panel
  probe            check the backend now
  help             show this text
  quit             exit";

/// A parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Forward to [`crate::App::dispatch`]
    Event(ShellEvent),
    /// Render the home screen
    Home,
    /// Render the status panel
    Status,
    /// Run a health check immediately
    Probe,
    /// Print usage
    Help,
    /// Leave the loop
    Quit,
}

/// Console input errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// Blank line
    #[error("No command given")]
    Empty,

    /// Unrecognized command word
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    /// Command needs an argument
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),

    /// Theme name not recognized
    #[error("{0}")]
    InvalidTheme(String),
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Err(CommandError::Empty);
    };
    let argument = words.next();

    let command = match word.to_lowercase().as_str() {
        "tab" => Command::Event(ShellEvent::Select(
            argument.ok_or(CommandError::MissingArgument("tab"))?.to_string(),
        )),
        "lang" => Command::Event(ShellEvent::SetLanguage(
            argument.ok_or(CommandError::MissingArgument("lang"))?.to_string(),
        )),
        "theme" => {
            let name: ThemeName = argument
                .ok_or(CommandError::MissingArgument("theme"))?
                .parse()
                .map_err(CommandError::InvalidTheme)?;
            Command::Event(ShellEvent::SetTheme(name))
        }
        "demo" => Command::Event(ShellEvent::Show(InfoAction::AnalysisDemo)),
        "features" => Command::Event(ShellEvent::Show(InfoAction::FeatureList)),
        "home" => Command::Home,
        "status" => Command::Status,
        "probe" => Command::Probe,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

// =============================================================================
// Rendering
// =============================================================================

/// Header line plus tabs in visual order; the focused tab is bracketed
pub fn render_tab_bar(bar: &TabBar) -> String {
    let tabs: Vec<String> = bar
        .tabs
        .iter()
        .map(|tab| {
            if tab.focused {
                format!("[{}:{}]", tab.glyph.name, tab.title)
            } else {
                format!(" {}:{} ", tab.glyph.name, tab.title)
            }
        })
        .collect();

    format!("== {} ==\n{}", bar.header_title, tabs.join("|"))
}

/// Heading and three `label: value` rows
pub fn render_status(panel: &StatusPanel) -> String {
    let mut out = format!("{}\n", panel.heading);
    for row in &panel.rows {
        let _ = writeln!(out, "  {}: {}", row.label, row.value);
    }
    out
}

/// The whole home screen
pub fn render_home(view: &HomeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title);
    let _ = writeln!(out, "{}", view.subtitle);
    let _ = writeln!(out, "{}\n", view.version);

    let _ = writeln!(out, "{}", view.features_heading);
    for card in &view.features {
        let _ = writeln!(out, "  {}\n    {}", card.title, card.description);
    }
    out.push('\n');

    for button in &view.actions {
        let _ = writeln!(out, "  ({})", button.label);
    }
    out.push('\n');

    out.push_str(&render_status(&view.status));
    out.push('\n');
    out.push_str(&view.footer.join("\n"));
    out
}

/// A boxed dialog with its dismiss button
pub fn render_modal(modal: &ModalMessage) -> String {
    format!(
        "+-- {} --\n{}\n+-- [{}]",
        modal.title, modal.body, modal.dismiss_label
    )
}
