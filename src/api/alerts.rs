//! Alert endpoints

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Alert rule identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AlertRule {
    RecurringMaintenance,
    RepeatedUrgent,
    LowSectorAvailability,
    StaleOpenMaintenance,
    PreventiveOverdue,
}

/// One derived alert; recomputed on every request, never stored
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Alert {
    pub rule: AlertRule,
    /// Human-readable explanation
    pub message: String,
    /// Flagged equipment, for equipment-scoped rules
    pub equipment_id: Option<i32>,
    pub equipment_name: Option<String>,
    /// Flagged sector, for sector-scoped rules
    pub sector: Option<String>,
    /// Flagged maintenance, for the stale-open rule
    pub maintenance_id: Option<i32>,
}

/// Alerts response
#[derive(Serialize, ToSchema)]
pub struct AlertsResponse {
    pub total: usize,
    pub alerts: Vec<Alert>,
}

/// Evaluate all alert rules against the current data
#[utoipa::path(
    get,
    path = "/alerts",
    tag = "alerts",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current alerts", body = AlertsResponse)
    )
)]
pub async fn get_alerts(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<AlertsResponse>> {
    let alerts = state.services.alerts.current().await?;
    Ok(Json(AlertsResponse {
        total: alerts.len(),
        alerts,
    }))
}
