//! Maintenance record model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::{MaintenanceKind, MaintenanceStatus};

/// Maintenance record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Maintenance {
    pub id: i32,
    pub equipment_id: i32,
    /// Kind code (0=preventive, 1=corrective, 2=urgent, 3=calibration,
    /// 4=sanitization, 5=inspection)
    pub kind: i16,
    pub description: String,
    pub started_at: DateTime<Utc>,
    /// Null while the maintenance is open
    pub finished_at: Option<DateTime<Utc>>,
    /// Status code (0=open, 1=closed)
    pub status: i16,
}

impl Maintenance {
    pub fn kind_enum(&self) -> MaintenanceKind {
        MaintenanceKind::from(self.kind)
    }

    pub fn status_enum(&self) -> MaintenanceStatus {
        MaintenanceStatus::from(self.status)
    }

    pub fn is_open(&self) -> bool {
        self.status_enum() == MaintenanceStatus::Open
    }
}

/// Maintenance with the owning equipment's name and sector, for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MaintenanceDetails {
    pub id: i32,
    pub equipment_id: i32,
    pub equipment_name: String,
    pub sector: String,
    pub kind: i16,
    pub description: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: i16,
}

/// Open maintenance request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct OpenMaintenance {
    pub equipment_id: i32,
    pub kind: MaintenanceKind,
    #[validate(length(min = 5, message = "description must be at least 5 characters"))]
    pub description: String,
}

/// Maintenance list filters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct MaintenanceFilter {
    pub status: Option<MaintenanceStatus>,
    pub equipment_id: Option<i32>,
}
