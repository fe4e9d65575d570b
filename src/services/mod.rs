//! Business logic services

pub mod alerts;
pub mod auth;
pub mod cache;
pub mod equipment;
pub mod maintenance;
pub mod stats;

use crate::{config::AppConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub equipment: equipment::EquipmentService,
    pub maintenance: maintenance::MaintenanceService,
    pub alerts: alerts::AlertsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository; the snapshot cache is
    /// shared so any write invalidates every derived view
    pub fn new(repository: Repository, config: &AppConfig) -> Self {
        let cache = cache::SnapshotCache::new(config.cache.ttl_seconds);
        Self {
            auth: auth::AuthService::new(config.auth.clone()),
            equipment: equipment::EquipmentService::new(repository.clone(), cache.clone()),
            maintenance: maintenance::MaintenanceService::new(repository.clone(), cache.clone()),
            alerts: alerts::AlertsService::new(
                repository.clone(),
                cache.clone(),
                config.alerts.clone(),
            ),
            stats: stats::StatsService::new(repository, cache),
        }
    }
}
