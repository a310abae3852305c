//! Connectivity monitor
//!
//! Runs the health probe and reports the outcome to the session status store.
//! The store itself never does I/O; this is the collaborator that does.

use std::sync::Arc;
use std::time::Duration;

use app_state::{BackendConnection, SessionStatusStore};
use tokio::time::MissedTickBehavior;

use crate::health::HealthProbe;

/// Drives backend connectivity updates into a [`SessionStatusStore`]
#[derive(Clone)]
pub struct ConnectivityMonitor {
    probe: Arc<dyn HealthProbe>,
    store: SessionStatusStore,
}

impl std::fmt::Debug for ConnectivityMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectivityMonitor")
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}

impl ConnectivityMonitor {
    /// Create a monitor
    pub fn new(probe: Arc<dyn HealthProbe>, store: SessionStatusStore) -> Self {
        Self { probe, store }
    }

    /// Run one health check and publish the result
    ///
    /// While the check is in flight the status reads `Connecting`, unless
    /// the backend is already connected; a routine re-check does not flicker
    /// a healthy status.
    pub async fn refresh(&self) -> BackendConnection {
        if !self.store.snapshot().backend_connected.is_connected() {
            self.store.set_backend_connected(BackendConnection::Connecting);
        }

        let connection = match self.probe.check().await {
            Ok(()) => BackendConnection::Connected,
            Err(e) => {
                tracing::warn!("Backend health check failed: {}", e);
                BackendConnection::Disconnected
            }
        };

        if self.store.set_backend_connected(connection) {
            tracing::info!(?connection, "Backend connectivity changed");
        }
        connection
    }

    /// Refresh immediately, then every `period`, until the task is dropped
    pub async fn run(self, period: Duration) {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.refresh().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::{HealthError, MockHealthProbe};
    use app_state::StatusEvent;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn monitor(probe: MockHealthProbe) -> (ConnectivityMonitor, SessionStatusStore) {
        let store = SessionStatusStore::new();
        (ConnectivityMonitor::new(Arc::new(probe), store.clone()), store)
    }

    #[tokio::test]
    async fn test_refresh_connected() {
        let mut probe = MockHealthProbe::new();
        probe.expect_check().times(1).returning(|| Ok(()));

        let (monitor, store) = monitor(probe);
        let mut events = store.subscribe_events();

        assert_eq!(monitor.refresh().await, BackendConnection::Connected);
        assert_eq!(store.snapshot().backend_connected, BackendConnection::Connected);

        assert_eq!(
            events.recv().await.unwrap(),
            StatusEvent::BackendConnected(BackendConnection::Connecting)
        );
        assert_eq!(
            events.recv().await.unwrap(),
            StatusEvent::BackendConnected(BackendConnection::Connected)
        );
    }

    #[tokio::test]
    async fn test_refresh_unhealthy() {
        let mut probe = MockHealthProbe::new();
        probe
            .expect_check()
            .times(1)
            .returning(|| Err(HealthError::Status(503)));

        let (monitor, store) = monitor(probe);
        assert_eq!(monitor.refresh().await, BackendConnection::Disconnected);
        assert_eq!(store.snapshot().backend_connected, BackendConnection::Disconnected);
    }

    #[tokio::test]
    async fn test_refresh_leaves_models_alone() {
        let mut probe = MockHealthProbe::new();
        probe.expect_check().returning(|| Ok(()));

        let (monitor, store) = monitor(probe);
        let before = store.snapshot().models_ready;
        monitor.refresh().await;
        assert_eq!(store.snapshot().models_ready, before);
    }

    #[tokio::test]
    async fn test_recheck_does_not_flicker_connected() {
        let mut probe = MockHealthProbe::new();
        probe.expect_check().times(2).returning(|| Ok(()));

        let (monitor, store) = monitor(probe);
        monitor.refresh().await;

        let mut events = store.subscribe_events();
        monitor.refresh().await;
        assert!(events.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_polls_periodically() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let mut probe = MockHealthProbe::new();
        probe.expect_check().returning(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });

        let (monitor, store) = monitor(probe);
        let handle = tokio::spawn(monitor.run(Duration::from_secs(30)));

        // Immediate tick, then at 30s and 60s
        tokio::time::sleep(Duration::from_secs(61)).await;
        handle.abort();

        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(store.snapshot().backend_connected, BackendConnection::Connected);
    }
}
