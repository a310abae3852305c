//! Tab navigation for the application shell
//!
//! This module provides:
//! - Route definitions and the ordered route registry
//! - Icon resolution through a lookup table with a single fallback glyph
//! - The navigation shell: active route, mounted screen, and tab bar layout
//!
//! The shell is built from explicitly constructed parts (registry, locale
//! resolver, theme provider) and validates them once when mounted.

use std::borrow::Borrow;
use std::collections::HashMap;

use i18n::{LocaleResolver, TextDirection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigurationFault, Result, UnknownRouteError};
use crate::theme::{Color, TabBarStyle, ThemeProvider};

// =============================================================================
// Routes
// =============================================================================

/// Unique identity of a top-level route (e.g. "Home")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteId(String);

impl RouteId {
    /// Create a route identity
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identity as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RouteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RouteId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for RouteId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A navigable top-level destination
///
/// The icon key and the label key are independent: a route's glyph need not
/// share a name with its title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Unique identity
    pub id: RouteId,
    /// Glyph name used for the tab icon
    pub icon_key: String,
    /// Message key used for the tab title
    pub label_key: String,
}

impl Route {
    /// Create a route
    pub fn new(
        id: impl Into<String>,
        icon_key: impl Into<String>,
        label_key: impl Into<String>,
    ) -> Self {
        Self {
            id: RouteId::new(id),
            icon_key: icon_key.into(),
            label_key: label_key.into(),
        }
    }
}

/// Ordered, duplicate-free set of top-level routes
///
/// Declaration order is tab order and is never changed after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRegistry {
    routes: Vec<Route>,
    index: HashMap<RouteId, usize>,
}

impl RouteRegistry {
    /// Create a registry, rejecting empty lists, incomplete routes and
    /// duplicate identities
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        if routes.is_empty() {
            return Err(ConfigurationFault::EmptyRegistry);
        }

        let mut index = HashMap::with_capacity(routes.len());
        for (position, route) in routes.iter().enumerate() {
            for (field, value) in [
                ("identity", route.id.as_str()),
                ("icon key", route.icon_key.as_str()),
                ("label key", route.label_key.as_str()),
            ] {
                if value.trim().is_empty() {
                    return Err(ConfigurationFault::IncompleteRoute {
                        route: route.id.to_string(),
                        field,
                    });
                }
            }

            if index.insert(route.id.clone(), position).is_some() {
                return Err(ConfigurationFault::DuplicateRoute(route.id.to_string()));
            }
        }

        Ok(Self { routes, index })
    }

    /// The application's tabs: Home, Camera, Analysis, Graphs, Settings
    pub fn standard() -> Self {
        let routes = vec![
            Route::new("Home", glyphs::HOME, "navigation-home"),
            Route::new("Camera", glyphs::CAMERA, "navigation-camera"),
            Route::new("Analysis", glyphs::ANALYTICS, "navigation-analysis"),
            Route::new("Graphs", glyphs::BAR_CHART, "navigation-graphs"),
            Route::new("Settings", glyphs::SETTINGS, "navigation-settings"),
        ];
        let index = routes
            .iter()
            .enumerate()
            .map(|(position, route)| (route.id.clone(), position))
            .collect();
        Self { routes, index }
    }

    /// All routes in declaration order
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Owned copy of the routes in declaration order
    pub fn list_routes(&self) -> Vec<Route> {
        self.routes.clone()
    }

    /// Look up a route by identity
    pub fn get(&self, id: &str) -> Option<&Route> {
        self.position(id).map(|position| &self.routes[position])
    }

    /// Declaration index of a route
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Number of routes (always at least one)
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Label keys of every route
    pub fn label_keys(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|route| route.label_key.as_str())
    }
}

// =============================================================================
// Icons
// =============================================================================

/// Glyph names known to the icon font
pub mod glyphs {
    /// Home tab
    pub const HOME: &str = "home";
    /// Camera tab
    pub const CAMERA: &str = "camera-alt";
    /// Analysis tab
    pub const ANALYTICS: &str = "analytics";
    /// Graphs tab
    pub const BAR_CHART: &str = "bar-chart";
    /// Settings tab
    pub const SETTINGS: &str = "settings";
    /// Fallback for unmapped routes and unrecognized icon keys
    pub const FALLBACK: &str = "help";

    /// Every glyph the shell can draw
    pub const KNOWN: [&str; 6] = [HOME, CAMERA, ANALYTICS, BAR_CHART, SETTINGS, FALLBACK];
}

/// Default tab icon size in points
pub const DEFAULT_ICON_SIZE: u16 = 24;

/// Render state passed to icon resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconState {
    /// Whether the tab is focused
    pub focused: bool,
    /// Tint to draw with
    pub color: Color,
    /// Size in points
    pub size: u16,
}

/// A resolved icon, ready to draw
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glyph {
    /// Glyph name in the icon font
    pub name: &'static str,
    /// Tint
    pub color: Color,
    /// Size in points
    pub size: u16,
    /// Whether the owning tab is focused
    pub focused: bool,
}

/// Route identity to glyph lookup, built once from the registry
#[derive(Debug, Clone)]
pub struct IconTable {
    by_route: HashMap<RouteId, &'static str>,
}

impl IconTable {
    /// Build the table, mapping unrecognized icon keys to the fallback glyph
    pub fn from_registry(registry: &RouteRegistry) -> Self {
        let by_route = registry
            .routes()
            .iter()
            .map(|route| {
                let glyph = glyphs::KNOWN
                    .into_iter()
                    .find(|known| *known == route.icon_key)
                    .unwrap_or_else(|| {
                        tracing::debug!(
                            route = %route.id,
                            icon_key = %route.icon_key,
                            "Unrecognized icon key, using fallback glyph"
                        );
                        glyphs::FALLBACK
                    });
                (route.id.clone(), glyph)
            })
            .collect();
        Self { by_route }
    }

    /// Glyph name for a route identity; unmapped identities get the fallback
    pub fn glyph_name(&self, id: &str) -> &'static str {
        self.by_route.get(id).copied().unwrap_or(glyphs::FALLBACK)
    }

    /// Resolve a route's icon for a render state
    pub fn icon_for(&self, id: &str, state: &IconState) -> Glyph {
        Glyph {
            name: self.glyph_name(id),
            color: state.color.clone(),
            size: state.size,
            focused: state.focused,
        }
    }
}

// =============================================================================
// Screens
// =============================================================================

/// The screen currently mounted for the active route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountedScreen {
    /// Route the screen belongs to
    pub route: RouteId,
    /// Unique per mount; a remount gets a new key
    pub instance: Uuid,
}

impl MountedScreen {
    fn mount(route: RouteId) -> Self {
        Self {
            route,
            instance: Uuid::new_v4(),
        }
    }
}

/// Result of a route change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenTransition {
    /// Screen that was torn down
    pub unmounted: MountedScreen,
    /// Screen that replaced it
    pub mounted: MountedScreen,
}

// =============================================================================
// Tab Bar
// =============================================================================

/// One rendered tab
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    /// Route behind the tab
    pub route: RouteId,
    /// Localized title
    pub title: String,
    /// Icon
    pub glyph: Glyph,
    /// Whether this is the active route
    pub focused: bool,
}

/// The rendered tab bar and header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabBar {
    /// Layout direction the tabs are ordered for
    pub direction: TextDirection,
    /// Tabs in visual order, left to right
    pub tabs: Vec<Tab>,
    /// Chrome colors
    pub style: TabBarStyle,
    /// Localized title of the active route, shown in the header
    pub header_title: String,
}

// =============================================================================
// Navigation Shell
// =============================================================================

/// Top-level tab container
///
/// Owns the active route and the mounted screen. Route changes only happen
/// through [`NavigationShell::select`]; `&mut self` serializes them.
///
/// # Example
///
/// ```rust
/// use app_ui::navigation::{NavigationShell, RouteRegistry};
/// use app_ui::theme::{ThemeName, ThemeProvider};
/// use i18n::{LocaleResolver, LocaleTable};
///
/// let locale = LocaleResolver::new(LocaleTable::bundled("en").unwrap());
/// let mut shell = NavigationShell::mount(
///     RouteRegistry::standard(),
///     locale,
///     ThemeProvider::new(ThemeName::Light),
/// )
/// .unwrap();
///
/// assert_eq!(shell.current_route().id.as_str(), "Home");
/// shell.select("Graphs").unwrap();
/// assert_eq!(shell.current_route().id.as_str(), "Graphs");
/// ```
#[derive(Debug)]
pub struct NavigationShell {
    registry: RouteRegistry,
    icons: IconTable,
    locale: LocaleResolver,
    theme: ThemeProvider,
    active: usize,
    mounted: MountedScreen,
}

impl NavigationShell {
    /// Validate the configuration and mount the first route
    ///
    /// # Errors
    ///
    /// Fails when any route title lacks a translation in any supported
    /// language.
    pub fn mount(
        registry: RouteRegistry,
        locale: LocaleResolver,
        theme: ThemeProvider,
    ) -> Result<Self> {
        locale.require(registry.label_keys())?;

        let icons = IconTable::from_registry(&registry);
        let mounted = MountedScreen::mount(registry.routes()[0].id.clone());
        tracing::debug!(route = %mounted.route, routes = registry.len(), "Navigation shell mounted");

        Ok(Self {
            registry,
            icons,
            locale,
            theme,
            active: 0,
            mounted,
        })
    }

    /// Switch to a route
    ///
    /// Returns the screen transition, or `None` when the route is already
    /// active. An unknown identity leaves the shell unchanged.
    pub fn select(
        &mut self,
        id: &str,
    ) -> std::result::Result<Option<ScreenTransition>, UnknownRouteError> {
        let position = self
            .registry
            .position(id)
            .ok_or_else(|| UnknownRouteError(id.to_string()))?;

        if position == self.active {
            return Ok(None);
        }

        let route = self.registry.routes()[position].id.clone();
        let unmounted = std::mem::replace(&mut self.mounted, MountedScreen::mount(route));
        self.active = position;
        tracing::debug!(from = %unmounted.route, to = %self.mounted.route, "Route selected");

        Ok(Some(ScreenTransition {
            unmounted,
            mounted: self.mounted.clone(),
        }))
    }

    /// The active route
    pub fn current_route(&self) -> &Route {
        &self.registry.routes()[self.active]
    }

    /// The mounted screen
    pub fn mounted_screen(&self) -> &MountedScreen {
        &self.mounted
    }

    /// Resolve a route's icon; unmapped identities get the fallback glyph
    pub fn icon_for(&self, id: &str, state: &IconState) -> Glyph {
        self.icons.icon_for(id, state)
    }

    /// Render the tab bar for the active language and theme
    ///
    /// Right-to-left languages mirror the visual order; the registry keeps
    /// its declared order.
    pub fn tab_bar(&self) -> TabBar {
        let style = self.theme.tab_bar_style();
        let direction = self.locale.active_direction();

        let mut tabs: Vec<Tab> = self
            .registry
            .routes()
            .iter()
            .enumerate()
            .map(|(position, route)| {
                let focused = position == self.active;
                let color = if focused {
                    style.active_tint.clone()
                } else {
                    style.inactive_tint.clone()
                };
                let state = IconState {
                    focused,
                    color,
                    size: DEFAULT_ICON_SIZE,
                };
                Tab {
                    route: route.id.clone(),
                    title: self.locale.label(&route.label_key),
                    glyph: self.icons.icon_for(route.id.as_str(), &state),
                    focused,
                }
            })
            .collect();

        if direction.is_rtl() {
            tabs.reverse();
        }

        TabBar {
            direction,
            tabs,
            style,
            header_title: self.locale.label(&self.current_route().label_key),
        }
    }

    /// Change the active language, returning its layout direction
    pub fn set_language(&mut self, code: &str) -> TextDirection {
        self.locale.set_language(code)
    }

    /// The route registry
    pub fn registry(&self) -> &RouteRegistry {
        &self.registry
    }

    /// The locale resolver
    pub fn locale(&self) -> &LocaleResolver {
        &self.locale
    }

    /// The theme provider
    pub fn theme(&self) -> &ThemeProvider {
        &self.theme
    }
}
