//! Maintenance workflow endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{Maintenance, MaintenanceDetails, MaintenanceFilter, OpenMaintenance},
};

use super::AuthenticatedUser;

/// List maintenances with equipment details, optionally filtered
#[utoipa::path(
    get,
    path = "/maintenances",
    tag = "maintenances",
    security(("bearer_auth" = [])),
    params(MaintenanceFilter),
    responses(
        (status = 200, description = "Maintenance list", body = Vec<MaintenanceDetails>)
    )
)]
pub async fn list_maintenances(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(filter): Query<MaintenanceFilter>,
) -> AppResult<Json<Vec<MaintenanceDetails>>> {
    let maintenances = state.services.maintenance.list(&filter).await?;
    Ok(Json(maintenances))
}

/// Get maintenance by ID
#[utoipa::path(
    get,
    path = "/maintenances/{id}",
    tag = "maintenances",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 200, description = "Maintenance details", body = Maintenance),
        (status = 404, description = "Maintenance not found")
    )
)]
pub async fn get_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Maintenance>> {
    let maintenance = state.services.maintenance.get_by_id(id).await?;
    Ok(Json(maintenance))
}

/// Open a maintenance against an Active equipment
#[utoipa::path(
    post,
    path = "/maintenances",
    tag = "maintenances",
    security(("bearer_auth" = [])),
    request_body = OpenMaintenance,
    responses(
        (status = 201, description = "Maintenance opened", body = Maintenance),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Equipment not found"),
        (status = 422, description = "Equipment is not active")
    )
)]
pub async fn open_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(data): Json<OpenMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    let maintenance = state.services.maintenance.open(&data).await?;
    Ok((StatusCode::CREATED, Json(maintenance)))
}

/// Finish an open maintenance
#[utoipa::path(
    post,
    path = "/maintenances/{id}/finish",
    tag = "maintenances",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 200, description = "Maintenance finished", body = Maintenance),
        (status = 404, description = "Maintenance not found"),
        (status = 422, description = "Maintenance already closed")
    )
)]
pub async fn finish_maintenance(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Maintenance>> {
    let maintenance = state.services.maintenance.finish(id).await?;
    Ok(Json(maintenance))
}
