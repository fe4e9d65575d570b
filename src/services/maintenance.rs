//! Maintenance workflow service

use validator::Validate;

use crate::{
    error::AppResult,
    models::maintenance::{Maintenance, MaintenanceDetails, MaintenanceFilter, OpenMaintenance},
    repository::Repository,
    services::cache::SnapshotCache,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
    cache: SnapshotCache,
}

impl MaintenanceService {
    pub fn new(repository: Repository, cache: SnapshotCache) -> Self {
        Self { repository, cache }
    }

    pub async fn list(&self, filter: &MaintenanceFilter) -> AppResult<Vec<MaintenanceDetails>> {
        self.repository.maintenance.list(filter).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Maintenance> {
        self.repository.maintenance.get_by_id(id).await
    }

    pub async fn history_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<Maintenance>> {
        // 404 on unknown equipment rather than an empty history
        self.repository.equipment.get_by_id(equipment_id).await?;
        self.repository.maintenance.list_for_equipment(equipment_id).await
    }

    /// Open a maintenance against an Active equipment and flip its status
    pub async fn open(&self, data: &OpenMaintenance) -> AppResult<Maintenance> {
        data.validate()?;
        let record = self.repository.maintenance.open(data).await?;
        self.cache.invalidate().await;
        tracing::info!(
            "Opened {} maintenance {} on equipment {}",
            record.kind_enum(),
            record.id,
            record.equipment_id
        );
        Ok(record)
    }

    /// Close an open maintenance and return its equipment to Active
    pub async fn finish(&self, id: i32) -> AppResult<Maintenance> {
        let record = self.repository.maintenance.finish(id).await?;
        self.cache.invalidate().await;
        tracing::info!(
            "Finished maintenance {} on equipment {}",
            record.id,
            record.equipment_id
        );
        Ok(record)
    }
}
