use std::sync::{Arc, Mutex};

use autonomes_client::{DashboardApi, DetailedStatus, HealthSnapshot};

use crate::sequence::RequestSequence;

#[derive(Debug, Default)]
struct Snapshots {
    health: Option<HealthSnapshot>,
    detailed: Option<DetailedStatus>,
    /// `refresh_all` calls still in flight
    refreshing: usize,
}

/// Latest health and detailed-status snapshots.
///
/// Fetch failures are logged and swallowed: whatever snapshot was shown
/// before stays in place.
#[derive(Clone)]
pub struct StatusFetcher {
    api: Arc<dyn DashboardApi>,
    state: Arc<Mutex<Snapshots>>,
    health_sequence: Arc<RequestSequence>,
    detailed_sequence: Arc<RequestSequence>,
}

impl StatusFetcher {
    pub fn new(api: Arc<dyn DashboardApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(Snapshots::default())),
            health_sequence: Arc::new(RequestSequence::new()),
            detailed_sequence: Arc::new(RequestSequence::new()),
        }
    }

    pub async fn fetch_health(&self) {
        let token = self.health_sequence.issue();
        match self.api.health().await {
            Ok(health) if self.health_sequence.is_latest(token) => {
                tracing::debug!(status = %health.status, services = health.services.len(), "health updated");
                self.state.lock().unwrap().health = Some(health);
            }
            Ok(_) => tracing::debug!(token, "discarding stale health response"),
            Err(e) => tracing::warn!("Failed to fetch system health: {}", e),
        }
    }

    pub async fn fetch_detailed_status(&self) {
        let token = self.detailed_sequence.issue();
        match self.api.status().await {
            Ok(status) if self.detailed_sequence.is_latest(token) => {
                tracing::debug!("detailed status updated");
                self.state.lock().unwrap().detailed = Some(status);
            }
            Ok(_) => tracing::debug!(token, "discarding stale status response"),
            Err(e) => tracing::warn!("Failed to fetch detailed status: {}", e),
        }
    }

    /// Fetch both snapshots concurrently; resolves once both have settled.
    pub async fn refresh_all(&self) {
        self.state.lock().unwrap().refreshing += 1;
        futures::join!(self.fetch_health(), self.fetch_detailed_status());
        self.state.lock().unwrap().refreshing -= 1;
    }

    pub fn health(&self) -> Option<HealthSnapshot> {
        self.state.lock().unwrap().health.clone()
    }

    pub fn detailed(&self) -> Option<DetailedStatus> {
        self.state.lock().unwrap().detailed.clone()
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.lock().unwrap().refreshing > 0
    }
}
