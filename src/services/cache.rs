//! Time-boxed snapshot cache
//!
//! Read endpoints (alerts, stats) work from a full-table snapshot. The
//! snapshot is memoized for a short TTL and dropped on every write, so a
//! stale read can never outlive the TTL.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

use crate::{error::AppResult, models::Snapshot, repository::Repository};

#[derive(Clone)]
pub struct SnapshotCache {
    ttl: Duration,
    inner: Arc<RwLock<Option<(Instant, Arc<Snapshot>)>>>,
}

impl SnapshotCache {
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_seconds),
            inner: Arc::new(RwLock::new(None)),
        }
    }

    /// Cached snapshot, if present and not expired
    pub async fn get(&self) -> Option<Arc<Snapshot>> {
        let guard = self.inner.read().await;
        match guard.as_ref() {
            Some((taken, snap)) if taken.elapsed() < self.ttl => Some(snap.clone()),
            _ => None,
        }
    }

    /// Cached snapshot, refreshed from the store when absent or expired
    pub async fn get_or_refresh(&self, repository: &Repository) -> AppResult<Arc<Snapshot>> {
        if let Some(snap) = self.get().await {
            return Ok(snap);
        }
        let equipment = repository.equipment.list_all().await?;
        let maintenances = repository.maintenance.list_all().await?;
        let snap = Arc::new(Snapshot::new(equipment, maintenances));
        *self.inner.write().await = Some((Instant::now(), snap.clone()));
        Ok(snap)
    }

    /// Drop the cached snapshot; called after every write
    pub async fn invalidate(&self) {
        *self.inner.write().await = None;
    }

    #[cfg(test)]
    async fn put(&self, snapshot: Snapshot) -> Arc<Snapshot> {
        let snap = Arc::new(snapshot);
        *self.inner.write().await = Some((Instant::now(), snap.clone()));
        snap
    }
}
