//! Equipment repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CreateEquipment, Equipment, EquipmentFilter},
    models::enums::EquipmentStatus,
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Postgres>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List equipment, optionally filtered by sector and/or status
    pub async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>(
            r#"
            SELECT * FROM equipment
            WHERE ($1::text IS NULL OR sector = $1)
              AND ($2::smallint IS NULL OR status = $2)
            ORDER BY name
            "#,
        )
        .bind(filter.sector.as_deref())
        .bind(filter.status.map(i16::from))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Full table, for snapshots
    pub async fn list_all(&self) -> AppResult<Vec<Equipment>> {
        let rows = sqlx::query_as::<_, Equipment>("SELECT * FROM equipment ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get equipment by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>("SELECT * FROM equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Insert new equipment with status Active
    pub async fn create(&self, data: &CreateEquipment) -> AppResult<Equipment> {
        let row = sqlx::query_as::<_, Equipment>(
            r#"
            INSERT INTO equipment (name, sector, serial_number, status)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.sector)
        .bind(&data.serial_number)
        .bind(i16::from(EquipmentStatus::Active))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update name/sector/serial/status; absent fields keep their value
    pub async fn update(
        &self,
        id: i32,
        name: Option<&str>,
        sector: Option<&str>,
        serial_number: Option<&str>,
        status: Option<EquipmentStatus>,
    ) -> AppResult<Equipment> {
        sqlx::query_as::<_, Equipment>(
            r#"
            UPDATE equipment
            SET name = COALESCE($2, name),
                sector = COALESCE($3, sector),
                serial_number = COALESCE($4, serial_number),
                status = COALESCE($5, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(sector)
        .bind(serial_number)
        .bind(status.map(i16::from))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Delete equipment
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        Ok(())
    }

    /// Whether another equipment already carries this serial number
    pub async fn serial_exists(&self, serial_number: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM equipment WHERE serial_number = $1)",
        )
        .bind(serial_number)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Distinct sectors currently present in the registry
    pub async fn distinct_sectors(&self) -> AppResult<Vec<String>> {
        let sectors: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT sector FROM equipment ORDER BY sector")
                .fetch_all(&self.pool)
                .await?;
        Ok(sectors)
    }
}
