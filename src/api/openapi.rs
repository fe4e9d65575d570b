//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{alerts, auth, equipment, health, maintenance, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MedTrack API",
        version = "0.3.0",
        description = "Hospital Equipment Maintenance Tracking REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Equipment
        equipment::list_equipment,
        equipment::get_equipment,
        equipment::create_equipment,
        equipment::update_equipment,
        equipment::delete_equipment,
        equipment::equipment_history,
        equipment::list_sectors,
        // Maintenances
        maintenance::list_maintenances,
        maintenance::get_maintenance,
        maintenance::open_maintenance,
        maintenance::finish_maintenance,
        // Alerts
        alerts::get_alerts,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::SessionInfo,
            // Equipment
            crate::models::equipment::Equipment,
            crate::models::equipment::CreateEquipment,
            crate::models::equipment::UpdateEquipment,
            crate::models::enums::EquipmentStatus,
            // Maintenances
            crate::models::maintenance::Maintenance,
            crate::models::maintenance::MaintenanceDetails,
            crate::models::maintenance::OpenMaintenance,
            crate::models::enums::MaintenanceKind,
            crate::models::enums::MaintenanceStatus,
            // Alerts
            alerts::Alert,
            alerts::AlertRule,
            alerts::AlertsResponse,
            // Stats
            stats::StatsResponse,
            stats::EquipmentStats,
            stats::MaintenanceStats,
            stats::SectorAvailability,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "equipment", description = "Equipment registry"),
        (name = "maintenances", description = "Maintenance workflow"),
        (name = "alerts", description = "Derived alerts"),
        (name = "stats", description = "Dashboard statistics")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
