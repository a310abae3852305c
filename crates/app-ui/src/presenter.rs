//! Home screen content: feature cards, status panel and info dialogs
//!
//! Everything here is derived synchronously from the locale resolver and a
//! session status snapshot. Nothing is fetched, and nothing is mutated.

use app_state::{BackendConnection, ModelReadiness, SessionStatus};
use i18n::{LocaleResolver, TextDirection};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeToken;

/// Informational actions offered on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InfoAction {
    /// "Start Analysis Demo"
    AnalysisDemo,
    /// "View All Features"
    FeatureList,
}

impl InfoAction {
    /// Both actions, in on-screen order
    pub const ALL: [InfoAction; 2] = [InfoAction::AnalysisDemo, InfoAction::FeatureList];

    fn label_key(&self) -> &'static str {
        match self {
            InfoAction::AnalysisDemo => "action-analysis-demo",
            InfoAction::FeatureList => "action-feature-list",
        }
    }

    fn template(&self) -> &'static ModalTemplate {
        match self {
            InfoAction::AnalysisDemo => &DEMO_TEMPLATE,
            InfoAction::FeatureList => &FEATURE_LIST_TEMPLATE,
        }
    }
}

/// A modal dialog with fixed copy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModalMessage {
    /// Dialog title
    pub title: String,
    /// Dialog body, lines separated by `\n`
    pub body: String,
    /// Label of the single dismiss button
    pub dismiss_label: String,
}

struct ModalTemplate {
    title: &'static str,
    intro: &'static str,
    items: &'static [&'static str],
    outro: &'static str,
    dismiss: &'static str,
}

static DEMO_TEMPLATE: ModalTemplate = ModalTemplate {
    title: "demo-title",
    intro: "demo-intro",
    items: &[
        "demo-item-camera",
        "demo-item-analysis",
        "demo-item-casa",
        "demo-item-languages",
        "demo-item-graphs",
    ],
    outro: "demo-outro",
    dismiss: "demo-dismiss",
};

static FEATURE_LIST_TEMPLATE: ModalTemplate = ModalTemplate {
    title: "feature-list-title",
    intro: "feature-list-intro",
    items: &[
        "feature-list-item-ai",
        "feature-list-item-camera",
        "feature-list-item-graphs",
        "feature-list-item-languages",
        "feature-list-item-realtime",
        "feature-list-item-reports",
    ],
    outro: "feature-list-outro",
    dismiss: "feature-list-dismiss",
};

impl ModalTemplate {
    fn keys(&'static self) -> impl Iterator<Item = &'static str> {
        [self.title, self.intro, self.outro, self.dismiss]
            .into_iter()
            .chain(self.items.iter().copied())
    }

    fn render(&self, locale: &LocaleResolver) -> ModalMessage {
        let items: Vec<String> = self.items.iter().map(|key| locale.label(key)).collect();
        let body = format!(
            "{}\n\n{}\n\n{}",
            locale.label(self.intro),
            items.join("\n"),
            locale.label(self.outro)
        );

        ModalMessage {
            title: locale.label(self.title),
            body,
            dismiss_label: locale.label(self.dismiss),
        }
    }
}

/// `(title key, description key)` of each feature card
const FEATURE_CARDS: [(&str, &str); 4] = [
    ("feature-analysis-title", "feature-analysis-description"),
    ("feature-camera-title", "feature-camera-description"),
    ("feature-graphs-title", "feature-graphs-description"),
    ("feature-language-title", "feature-language-description"),
];

const HEADER_KEYS: [&str; 3] = ["app-title", "app-subtitle", "app-version"];
const FOOTER_KEYS: [&str; 3] = ["footer-developer", "footer-role", "footer-built"];
const STATUS_KEYS: [&str; 13] = [
    "features-heading",
    "status-heading",
    "status-client",
    "status-models",
    "status-backend",
    "status-client-active",
    "status-client-inactive",
    "status-models-ready",
    "status-models-pending",
    "status-models-unknown",
    "status-backend-connected",
    "status-backend-connecting",
    "status-backend-disconnected",
];

// =============================================================================
// View Model
// =============================================================================

/// Color tone of a status value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusTone {
    /// Healthy
    Positive,
    /// Waiting on something
    Warning,
    /// Action needed or in progress
    Info,
    /// No information
    Muted,
}

impl StatusTone {
    /// Theme token the tone is drawn with
    pub fn token(&self) -> ThemeToken {
        match self {
            StatusTone::Positive => ThemeToken::Positive,
            StatusTone::Warning => ThemeToken::Warning,
            StatusTone::Info => ThemeToken::Info,
            StatusTone::Muted => ThemeToken::Outline,
        }
    }
}

/// One row of the status panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    /// Row label ("AI Models")
    pub label: String,
    /// Current value ("Loading")
    pub value: String,
    /// Tone of the value
    pub tone: StatusTone,
}

/// The three-row system status panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusPanel {
    /// Panel heading
    pub heading: String,
    /// Client, models and backend rows, in that order
    pub rows: [StatusRow; 3],
}

/// A static feature description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    /// Card title
    pub title: String,
    /// Card body
    pub description: String,
}

/// A button on the home screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionButton {
    /// Action triggered on press
    pub action: InfoAction,
    /// Localized label
    pub label: String,
}

/// Everything the home screen shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomeView {
    /// Layout direction of the active language
    pub direction: TextDirection,
    /// App title
    pub title: String,
    /// Tagline
    pub subtitle: String,
    /// "Version x.y.z"
    pub version: String,
    /// Heading above the feature cards
    pub features_heading: String,
    /// Feature cards
    pub features: Vec<FeatureCard>,
    /// Informational actions
    pub actions: Vec<ActionButton>,
    /// System status
    pub status: StatusPanel,
    /// Developer credits
    pub footer: Vec<String>,
}

// =============================================================================
// Presenter
// =============================================================================

/// Builds the home screen and the informational dialogs
#[derive(Debug, Clone, Default)]
pub struct FeaturePresenter {
    version: String,
}

impl FeaturePresenter {
    /// Create a presenter showing the given application version
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Every message key the presenter resolves, for startup validation
    pub fn message_keys() -> impl Iterator<Item = &'static str> {
        HEADER_KEYS
            .into_iter()
            .chain(FOOTER_KEYS)
            .chain(STATUS_KEYS)
            .chain(FEATURE_CARDS.into_iter().flat_map(|(title, desc)| [title, desc]))
            .chain(InfoAction::ALL.into_iter().map(|action| action.label_key()))
            .chain(DEMO_TEMPLATE.keys())
            .chain(FEATURE_LIST_TEMPLATE.keys())
    }

    /// Build the home screen for a status snapshot
    pub fn home_view(&self, locale: &LocaleResolver, status: &SessionStatus) -> HomeView {
        HomeView {
            direction: locale.active_direction(),
            title: locale.label("app-title"),
            subtitle: locale.label("app-subtitle"),
            version: format!("{} {}", locale.label("app-version"), self.version),
            features_heading: locale.label("features-heading"),
            features: FEATURE_CARDS
                .iter()
                .map(|(title, description)| FeatureCard {
                    title: locale.label(title),
                    description: locale.label(description),
                })
                .collect(),
            actions: InfoAction::ALL
                .into_iter()
                .map(|action| ActionButton {
                    action,
                    label: locale.label(action.label_key()),
                })
                .collect(),
            status: self.status_panel(locale, status),
            footer: FOOTER_KEYS.iter().map(|key| locale.label(key)).collect(),
        }
    }

    /// Build the status panel; the model and backend rows are independent
    pub fn status_panel(&self, locale: &LocaleResolver, status: &SessionStatus) -> StatusPanel {
        let (client_key, client_tone) = if status.client_active {
            ("status-client-active", StatusTone::Positive)
        } else {
            ("status-client-inactive", StatusTone::Warning)
        };

        let (models_key, models_tone) = match status.models_ready {
            ModelReadiness::Ready => ("status-models-ready", StatusTone::Positive),
            ModelReadiness::Pending => ("status-models-pending", StatusTone::Warning),
            ModelReadiness::Unknown => ("status-models-unknown", StatusTone::Muted),
        };

        let (backend_key, backend_tone) = match status.backend_connected {
            BackendConnection::Connected => ("status-backend-connected", StatusTone::Positive),
            BackendConnection::Connecting => ("status-backend-connecting", StatusTone::Info),
            BackendConnection::Disconnected => ("status-backend-disconnected", StatusTone::Info),
        };

        let row = |label: &str, value: &str, tone| StatusRow {
            label: locale.label(label),
            value: locale.label(value),
            tone,
        };

        StatusPanel {
            heading: locale.label("status-heading"),
            rows: [
                row("status-client", client_key, client_tone),
                row("status-models", models_key, models_tone),
                row("status-backend", backend_key, backend_tone),
            ],
        }
    }

    /// Produce the dialog for an informational action
    ///
    /// Synchronous and idempotent: the same action in the same language
    /// always yields the same message.
    pub fn show(&self, locale: &LocaleResolver, action: InfoAction) -> ModalMessage {
        action.template().render(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18n::LocaleTable;

    fn english() -> LocaleResolver {
        LocaleResolver::new(LocaleTable::bundled("en").unwrap())
    }

    fn arabic() -> LocaleResolver {
        LocaleResolver::with_language(LocaleTable::bundled("en").unwrap(), "ar")
    }

    #[test]
    fn test_all_keys_translated() {
        english().require(FeaturePresenter::message_keys()).unwrap();
    }

    #[test]
    fn test_home_view_content() {
        let view = FeaturePresenter::new("1.0.0").home_view(&english(), &SessionStatus::default());

        assert_eq!(view.title, "🧬 Sperm Analyzer AI");
        assert_eq!(view.version, "Version 1.0.0");
        assert_eq!(view.features.len(), 4);
        assert_eq!(view.features[1].title, "📸 Camera Integration");
        assert_eq!(view.actions.len(), 2);
        assert_eq!(view.actions[0].action, InfoAction::AnalysisDemo);
        assert_eq!(view.footer.len(), 3);
        assert_eq!(view.direction, TextDirection::Ltr);
    }

    #[test]
    fn test_default_status_rows() {
        let panel = FeaturePresenter::default().status_panel(&english(), &SessionStatus::default());

        let rows: Vec<(&str, &str, StatusTone)> = panel
            .rows
            .iter()
            .map(|r| (r.label.as_str(), r.value.as_str(), r.tone))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("Mobile App", "✅ Active", StatusTone::Positive),
                ("AI Models", "🟡 Loading", StatusTone::Warning),
                ("Backend", "🔄 Connect Required", StatusTone::Info),
            ]
        );
    }

    #[test]
    fn test_status_axes_render_independently() {
        let presenter = FeaturePresenter::default();
        let status = SessionStatus {
            client_active: true,
            models_ready: ModelReadiness::Ready,
            backend_connected: BackendConnection::Disconnected,
        };
        let panel = presenter.status_panel(&english(), &status);
        assert_eq!(panel.rows[1].value, "🟢 Ready");
        assert_eq!(panel.rows[2].value, "🔄 Connect Required");

        let status = SessionStatus {
            client_active: true,
            models_ready: ModelReadiness::Unknown,
            backend_connected: BackendConnection::Connected,
        };
        let panel = presenter.status_panel(&english(), &status);
        assert_eq!(panel.rows[1].tone, StatusTone::Muted);
        assert_eq!(panel.rows[2].value, "✅ Connected");
        assert_eq!(panel.rows[2].tone, StatusTone::Positive);
    }

    #[test]
    fn test_analysis_demo_modal() {
        let modal = FeaturePresenter::default().show(&english(), InfoAction::AnalysisDemo);
        assert_eq!(modal.title, "Sperm Analysis Demo");
        assert_eq!(modal.dismiss_label, "OK");
        assert!(modal.body.starts_with("AI-powered sperm analysis system ready!\n\n"));
        assert!(modal.body.contains("✅ CASA metrics calculation\n"));
        assert!(modal.body.ends_with("\n\nConnect to backend server to start analysis."));
    }

    #[test]
    fn test_feature_list_modal() {
        let modal = FeaturePresenter::default().show(&english(), InfoAction::FeatureList);
        assert_eq!(modal.title, "App Features");
        assert_eq!(modal.dismiss_label, "Amazing!");
        assert_eq!(modal.body.lines().count(), 1 + 1 + 6 + 1 + 1);
    }

    #[test]
    fn test_modals_are_idempotent() {
        let presenter = FeaturePresenter::default();
        let locale = english();
        for action in InfoAction::ALL {
            assert_eq!(presenter.show(&locale, action), presenter.show(&locale, action));
        }
    }

    #[test]
    fn test_arabic_content() {
        let locale = arabic();
        let presenter = FeaturePresenter::new("1.0.0");

        let view = presenter.home_view(&locale, &SessionStatus::default());
        assert_eq!(view.direction, TextDirection::Rtl);
        assert_eq!(view.status.rows[2].label, "الخادم");

        let modal = presenter.show(&locale, InfoAction::AnalysisDemo);
        assert_eq!(modal.dismiss_label, "حسناً");
    }

    #[test]
    fn test_tone_tokens() {
        assert_eq!(StatusTone::Positive.token(), ThemeToken::Positive);
        assert_eq!(StatusTone::Muted.token(), ThemeToken::Outline);
    }
}
