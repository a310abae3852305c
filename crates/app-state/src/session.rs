//! Session status tracking
//!
//! The session status is the three-row readiness indicator shown before a
//! live analysis: whether the client is active, whether the AI models are
//! ready, and whether the backend is reachable.
//!
//! The store never polls or performs I/O. External collaborators (a
//! connectivity probe, the model loader) report changes as [`StatusEvent`]s
//! through [`SessionStatusStore::apply`], the single update entry point.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

/// Capacity of the status event broadcast channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

// =============================================================================
// Status Types
// =============================================================================

/// Readiness of the AI models used by the analysis backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelReadiness {
    /// Models are loaded and usable
    Ready,
    /// Models are loading or not yet reported
    #[default]
    Pending,
    /// The readiness source could not tell
    Unknown,
}

/// Connectivity to the analysis backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendConnection {
    /// Backend answered its health check
    Connected,
    /// A health check is in flight
    Connecting,
    /// Backend unreachable or never checked
    #[default]
    Disconnected,
}

impl BackendConnection {
    /// Check if the backend is usable
    pub fn is_connected(&self) -> bool {
        matches!(self, BackendConnection::Connected)
    }
}

/// Snapshot of the session status
///
/// `models_ready` and `backend` are independent: ready models do not imply
/// a connected backend and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    /// The client shell is running
    pub client_active: bool,
    /// AI model readiness
    pub models_ready: ModelReadiness,
    /// Backend connectivity
    pub backend_connected: BackendConnection,
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self {
            client_active: true,
            models_ready: ModelReadiness::Pending,
            backend_connected: BackendConnection::Disconnected,
        }
    }
}

// =============================================================================
// Status Events
// =============================================================================

/// A status change reported by an external collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum StatusEvent {
    /// Client activity changed
    ClientActive(bool),
    /// Model readiness changed
    ModelsReady(ModelReadiness),
    /// Backend connectivity changed
    BackendConnected(BackendConnection),
}

impl StatusEvent {
    /// Apply this event to a status, returning whether anything changed
    pub fn apply_to(&self, status: &mut SessionStatus) -> bool {
        match *self {
            StatusEvent::ClientActive(active) => {
                replace_if_changed(&mut status.client_active, active)
            }
            StatusEvent::ModelsReady(ready) => replace_if_changed(&mut status.models_ready, ready),
            StatusEvent::BackendConnected(connection) => {
                replace_if_changed(&mut status.backend_connected, connection)
            }
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

// =============================================================================
// Status Store
// =============================================================================

/// Shared, cloneable holder of the session status
///
/// # Example
///
/// ```
/// use app_state::session::{BackendConnection, ModelReadiness, SessionStatusStore};
///
/// let store = SessionStatusStore::new();
/// store.set_backend_connected(BackendConnection::Connected);
///
/// let status = store.snapshot();
/// assert_eq!(status.backend_connected, BackendConnection::Connected);
/// assert_eq!(status.models_ready, ModelReadiness::Pending);
/// ```
#[derive(Debug, Clone)]
pub struct SessionStatusStore {
    /// Latest status
    status_tx: Arc<watch::Sender<SessionStatus>>,
    /// Applied events, in application order
    events_tx: broadcast::Sender<StatusEvent>,
}

impl Default for SessionStatusStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStatusStore {
    /// Create a store holding the mount-time defaults
    pub fn new() -> Self {
        let (status_tx, _) = watch::channel(SessionStatus::default());
        let (events_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            status_tx: Arc::new(status_tx),
            events_tx,
        }
    }

    /// Current status
    pub fn snapshot(&self) -> SessionStatus {
        *self.status_tx.borrow()
    }

    /// Apply a status event, returning whether the status changed
    ///
    /// Re-applying an event that matches the current status is a no-op and
    /// notifies nobody.
    pub fn apply(&self, event: StatusEvent) -> bool {
        // Broadcast under the watch lock so event order matches stored order
        let changed = self.status_tx.send_if_modified(|status| {
            let changed = event.apply_to(status);
            if changed {
                // No subscribers is fine
                let _ = self.events_tx.send(event);
            }
            changed
        });

        if changed {
            tracing::debug!(?event, "Session status changed");
        }
        changed
    }

    /// Report backend connectivity
    pub fn set_backend_connected(&self, connection: BackendConnection) -> bool {
        self.apply(StatusEvent::BackendConnected(connection))
    }

    /// Report AI model readiness
    pub fn set_models_ready(&self, readiness: ModelReadiness) -> bool {
        self.apply(StatusEvent::ModelsReady(readiness))
    }

    /// Report client activity
    pub fn set_client_active(&self, active: bool) -> bool {
        self.apply(StatusEvent::ClientActive(active))
    }

    /// Subscribe to status snapshots
    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status_tx.subscribe()
    }

    /// Subscribe to applied status events
    pub fn subscribe_events(&self) -> broadcast::Receiver<StatusEvent> {
        self.events_tx.subscribe()
    }
}
