//! Data models for MedTrack

pub mod auth;
pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod snapshot;

// Re-export commonly used types
pub use enums::{EquipmentStatus, MaintenanceKind, MaintenanceStatus};
pub use equipment::{CreateEquipment, Equipment, UpdateEquipment};
pub use maintenance::{Maintenance, MaintenanceDetails, OpenMaintenance};
pub use snapshot::Snapshot;
