//! Dashboard statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Dashboard statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Equipment statistics
    pub equipment: EquipmentStats,
    /// Maintenance statistics
    pub maintenances: MaintenanceStats,
    /// Per-sector availability
    pub sectors: Vec<SectorAvailability>,
}

#[derive(Serialize, ToSchema)]
pub struct EquipmentStats {
    /// Total number of equipment
    pub total: i64,
    /// Equipment currently Active
    pub active: i64,
    /// Equipment currently in maintenance
    pub in_maintenance: i64,
    /// Share of Active equipment, in percent (0 when the registry is empty)
    pub pct_active: f64,
    /// Equipment by status
    pub by_status: Vec<StatEntry>,
    /// Equipment by sector
    pub by_sector: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct MaintenanceStats {
    /// Total number of maintenance records
    pub total: i64,
    /// Open records
    pub open: i64,
    /// Closed records
    pub closed: i64,
    /// Share of closed records, in percent (0 when there are none)
    pub pct_closed: f64,
    /// Records by kind
    pub by_kind: Vec<StatEntry>,
    /// Records by the owning equipment's sector
    pub by_sector: Vec<StatEntry>,
    /// Mean open-to-close time over closed records, in hours
    pub mean_time_to_resolve_hours: Option<f64>,
}

/// Availability of one sector
#[derive(Serialize, ToSchema)]
pub struct SectorAvailability {
    pub sector: String,
    pub total: i64,
    pub active: i64,
    /// Active / total × 100; a sector with no equipment is 0
    pub availability_pct: f64,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
