//! Maintenance repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::enums::{EquipmentStatus, MaintenanceStatus},
    models::maintenance::{Maintenance, MaintenanceDetails, MaintenanceFilter, OpenMaintenance},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get maintenance by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenances WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))
    }

    /// List maintenances with equipment name and sector, optionally filtered
    pub async fn list(&self, filter: &MaintenanceFilter) -> AppResult<Vec<MaintenanceDetails>> {
        let rows = sqlx::query_as::<_, MaintenanceDetails>(
            r#"
            SELECT m.id, m.equipment_id, e.name AS equipment_name, e.sector,
                   m.kind, m.description, m.started_at, m.finished_at, m.status
            FROM maintenances m
            JOIN equipment e ON m.equipment_id = e.id
            WHERE ($1::smallint IS NULL OR m.status = $1)
              AND ($2::int IS NULL OR m.equipment_id = $2)
            ORDER BY m.started_at DESC, m.id DESC
            "#,
        )
        .bind(filter.status.map(i16::from))
        .bind(filter.equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// History for one equipment, newest first
    pub async fn list_for_equipment(&self, equipment_id: i32) -> AppResult<Vec<Maintenance>> {
        let rows = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenances WHERE equipment_id = $1 ORDER BY started_at DESC, id DESC",
        )
        .bind(equipment_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Full table, for snapshots
    pub async fn list_all(&self) -> AppResult<Vec<Maintenance>> {
        let rows = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenances ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Whether any maintenance references the equipment
    pub async fn exists_for_equipment(&self, equipment_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM maintenances WHERE equipment_id = $1)",
        )
        .bind(equipment_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Open a maintenance against an Active equipment.
    ///
    /// The record insert and the equipment status flip run in one
    /// transaction; the equipment row is locked first so a concurrent open
    /// against the same equipment sees the flipped status and is rejected.
    pub async fn open(&self, data: &OpenMaintenance) -> AppResult<Maintenance> {
        let mut tx = self.pool.begin().await?;

        let status: Option<i16> =
            sqlx::query_scalar("SELECT status FROM equipment WHERE id = $1 FOR UPDATE")
                .bind(data.equipment_id)
                .fetch_optional(&mut *tx)
                .await?;

        let status = status.ok_or_else(|| {
            AppError::NotFound(format!("Equipment {} not found", data.equipment_id))
        })?;

        if EquipmentStatus::from(status) != EquipmentStatus::Active {
            return Err(AppError::BusinessRule(format!(
                "Equipment {} is not active ({})",
                data.equipment_id,
                EquipmentStatus::from(status)
            )));
        }

        let record = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenances (equipment_id, kind, description, started_at, status)
            VALUES ($1, $2, $3, NOW(), $4)
            RETURNING *
            "#,
        )
        .bind(data.equipment_id)
        .bind(i16::from(data.kind))
        .bind(&data.description)
        .bind(i16::from(MaintenanceStatus::Open))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE equipment SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(data.equipment_id)
            .bind(i16::from(EquipmentStatus::InMaintenance))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }

    /// Close an open maintenance and reset its equipment to Active.
    ///
    /// Opening requires an Active equipment, so at most one record per
    /// equipment can be open; the unconditional reset keeps the invariant.
    pub async fn finish(&self, id: i32) -> AppResult<Maintenance> {
        let mut tx = self.pool.begin().await?;

        let record = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenances WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))?;

        if !record.is_open() {
            return Err(AppError::BusinessRule(format!(
                "Maintenance {} is already closed",
                id
            )));
        }

        let record = sqlx::query_as::<_, Maintenance>(
            r#"
            UPDATE maintenances
            SET finished_at = NOW(), status = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(i16::from(MaintenanceStatus::Closed))
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query("UPDATE equipment SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(record.equipment_id)
            .bind(i16::from(EquipmentStatus::Active))
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(record)
    }
}
