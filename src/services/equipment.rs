//! Equipment service

use indexmap::IndexSet;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::enums::EquipmentStatus,
    models::equipment::{
        CreateEquipment, Equipment, EquipmentFilter, UpdateEquipment, PRESET_SECTORS,
    },
    repository::Repository,
    services::cache::SnapshotCache,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    cache: SnapshotCache,
}

impl EquipmentService {
    pub fn new(repository: Repository, cache: SnapshotCache) -> Self {
        Self { repository, cache }
    }

    pub async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>> {
        self.repository.equipment.list(filter).await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        self.repository.equipment.get_by_id(id).await
    }

    /// Register new equipment; it starts Active
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        // Serial uniqueness is intended but not enforced; a duplicate is
        // worth a warning in the log.
        if self
            .repository
            .equipment
            .serial_exists(&data.serial_number)
            .await?
        {
            tracing::warn!(
                "Registering equipment '{}' with duplicate serial number {}",
                data.name,
                data.serial_number
            );
        }

        let equipment = self.repository.equipment.create(data).await?;
        self.cache.invalidate().await;
        tracing::info!("Registered equipment {} ({})", equipment.id, equipment.name);
        Ok(equipment)
    }

    /// Edit equipment fields or set a manual status.
    ///
    /// InMaintenance is owned by the open/finish workflow: it can neither be
    /// entered nor left through this endpoint.
    pub async fn update(&self, id: i32, data: &UpdateEquipment) -> AppResult<Equipment> {
        data.validate()?;

        if let Some(new_status) = data.status {
            if new_status == EquipmentStatus::InMaintenance {
                return Err(AppError::BusinessRule(
                    "Status 'in_maintenance' is set by opening a maintenance".to_string(),
                ));
            }
            let current = self.repository.equipment.get_by_id(id).await?;
            if current.status_enum() == EquipmentStatus::InMaintenance {
                return Err(AppError::BusinessRule(
                    "Equipment is in maintenance; finish the open maintenance first".to_string(),
                ));
            }
        }

        let equipment = self
            .repository
            .equipment
            .update(
                id,
                data.name.as_deref(),
                data.sector.as_deref(),
                data.serial_number.as_deref(),
                data.status,
            )
            .await?;
        self.cache.invalidate().await;
        Ok(equipment)
    }

    /// Remove a mis-registered equipment; rejected once it has history
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.repository.maintenance.exists_for_equipment(id).await? {
            return Err(AppError::Conflict(format!(
                "Equipment {} has maintenance history and cannot be deleted",
                id
            )));
        }
        self.repository.equipment.delete(id).await?;
        self.cache.invalidate().await;
        Ok(())
    }

    /// Preset sector suggestions merged with sectors already in use
    pub async fn sectors(&self) -> AppResult<Vec<String>> {
        let mut sectors: IndexSet<String> =
            PRESET_SECTORS.iter().map(|s| s.to_string()).collect();
        sectors.extend(self.repository.equipment.distinct_sectors().await?);
        Ok(sectors.into_iter().collect())
    }
}
