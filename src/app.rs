//! Application bootstrap
//!
//! [`App`] wires the locale table, theme, route registry, status store and
//! presenter together from a [`ShellConfig`], and routes user intents to
//! them through [`App::dispatch`].

use app_state::{SessionStatus, SessionStatusStore, StatusEvent};
use app_ui::{
    ConfigurationFault, FeaturePresenter, HomeView, InfoAction, ModalMessage, NavigationShell,
    RouteRegistry, ScreenTransition, TabBar, ThemeName, ThemeProvider, UnknownRouteError,
};
use i18n::{LocaleResolver, LocaleTable, TextDirection};
use serde::{Deserialize, Serialize};

use crate::config::ShellConfig;

/// Version shown on the home screen
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// A user intent or a reported status change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum ShellEvent {
    /// Tab pressed
    Select(String),
    /// Language picked
    SetLanguage(String),
    /// Theme picked
    SetTheme(ThemeName),
    /// Informational button pressed
    Show(InfoAction),
    /// Status reported by a collaborator
    Status(StatusEvent),
}

/// What a dispatched event did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum Outcome {
    /// The active route changed
    Navigated(ScreenTransition),
    /// Nothing changed
    Unchanged,
    /// Active language changed; carries its layout direction
    LanguageChanged(TextDirection),
    /// Palette swapped
    ThemeChanged(ThemeName),
    /// A dialog should be shown
    Modal(ModalMessage),
    /// The status panel needs a redraw
    StatusChanged(SessionStatus),
}

/// The running shell
#[derive(Debug)]
pub struct App {
    shell: NavigationShell,
    status: SessionStatusStore,
    presenter: FeaturePresenter,
}

impl App {
    /// Build and validate the shell
    ///
    /// # Errors
    ///
    /// Any [`ConfigurationFault`]: a default language without a bundle, a
    /// translation missing from a bundle, or an invalid custom palette.
    pub fn new(config: &ShellConfig) -> Result<Self, ConfigurationFault> {
        let table = LocaleTable::bundled(&config.default_language)?;
        let locale = LocaleResolver::with_language(table, &config.language);
        locale.require(FeaturePresenter::message_keys())?;

        let theme = ThemeProvider::from_tokens(config.theme_tokens()?);
        let shell = NavigationShell::mount(RouteRegistry::standard(), locale, theme)?;

        tracing::info!(
            language = %shell.locale().active_language(),
            route = %shell.current_route().id,
            "Shell ready"
        );

        Ok(Self {
            shell,
            status: SessionStatusStore::new(),
            presenter: FeaturePresenter::new(APP_VERSION),
        })
    }

    /// Handle one event
    ///
    /// # Errors
    ///
    /// Selecting an unknown route fails and leaves the shell unchanged.
    pub fn dispatch(&mut self, event: ShellEvent) -> Result<Outcome, UnknownRouteError> {
        let outcome = match event {
            ShellEvent::Select(id) => match self.shell.select(&id)? {
                Some(transition) => Outcome::Navigated(transition),
                None => Outcome::Unchanged,
            },
            ShellEvent::SetLanguage(code) => {
                let before = self.shell.locale().active_language().clone();
                let direction = self.shell.set_language(&code);
                if *self.shell.locale().active_language() == before {
                    Outcome::Unchanged
                } else {
                    Outcome::LanguageChanged(direction)
                }
            }
            ShellEvent::SetTheme(name) => {
                if self.shell.theme().tokens().name() == Some(name) {
                    Outcome::Unchanged
                } else {
                    self.shell.theme().switch(name);
                    Outcome::ThemeChanged(name)
                }
            }
            ShellEvent::Show(action) => {
                Outcome::Modal(self.presenter.show(self.shell.locale(), action))
            }
            ShellEvent::Status(event) => {
                if self.status.apply(event) {
                    Outcome::StatusChanged(self.status.snapshot())
                } else {
                    Outcome::Unchanged
                }
            }
        };
        Ok(outcome)
    }

    /// The home screen for the current language and status
    pub fn home_view(&self) -> HomeView {
        self.presenter
            .home_view(self.shell.locale(), &self.status.snapshot())
    }

    /// The tab bar for the current route, language and theme
    pub fn tab_bar(&self) -> TabBar {
        self.shell.tab_bar()
    }

    /// The navigation shell
    pub fn shell(&self) -> &NavigationShell {
        &self.shell
    }

    /// Shared status store, for collaborators that report status
    pub fn status_store(&self) -> &SessionStatusStore {
        &self.status
    }

    /// Modal for an informational action
    pub fn modal(&self, action: InfoAction) -> ModalMessage {
        self.presenter.show(self.shell.locale(), action)
    }
}
