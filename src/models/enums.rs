//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// EquipmentStatus
// ---------------------------------------------------------------------------

/// Equipment status codes (stored in equipment.status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    Active = 0,
    InMaintenance = 1,
    AwaitingParts = 2,
    Inactive = 3,
}

impl From<i16> for EquipmentStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => EquipmentStatus::InMaintenance,
            2 => EquipmentStatus::AwaitingParts,
            3 => EquipmentStatus::Inactive,
            _ => EquipmentStatus::Active,
        }
    }
}

impl From<EquipmentStatus> for i16 {
    fn from(s: EquipmentStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            EquipmentStatus::Active => "Active",
            EquipmentStatus::InMaintenance => "In maintenance",
            EquipmentStatus::AwaitingParts => "Awaiting parts",
            EquipmentStatus::Inactive => "Inactive",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceKind
// ---------------------------------------------------------------------------

/// Maintenance type codes (stored in maintenances.kind)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceKind {
    Preventive = 0,
    Corrective = 1,
    Urgent = 2,
    Calibration = 3,
    Sanitization = 4,
    Inspection = 5,
}

impl From<i16> for MaintenanceKind {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceKind::Corrective,
            2 => MaintenanceKind::Urgent,
            3 => MaintenanceKind::Calibration,
            4 => MaintenanceKind::Sanitization,
            5 => MaintenanceKind::Inspection,
            _ => MaintenanceKind::Preventive,
        }
    }
}

impl From<MaintenanceKind> for i16 {
    fn from(k: MaintenanceKind) -> Self {
        k as i16
    }
}

impl std::fmt::Display for MaintenanceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceKind::Preventive => "Preventive",
            MaintenanceKind::Corrective => "Corrective",
            MaintenanceKind::Urgent => "Urgent",
            MaintenanceKind::Calibration => "Calibration",
            MaintenanceKind::Sanitization => "Sanitization",
            MaintenanceKind::Inspection => "Inspection",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// MaintenanceStatus
// ---------------------------------------------------------------------------

/// Maintenance lifecycle status (stored in maintenances.status)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[repr(i16)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open = 0,
    Closed = 1,
}

impl From<i16> for MaintenanceStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => MaintenanceStatus::Closed,
            _ => MaintenanceStatus::Open,
        }
    }
}

impl From<MaintenanceStatus> for i16 {
    fn from(s: MaintenanceStatus) -> Self {
        s as i16
    }
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            MaintenanceStatus::Open => "Open",
            MaintenanceStatus::Closed => "Closed",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_status_roundtrip() {
        for status in [
            EquipmentStatus::Active,
            EquipmentStatus::InMaintenance,
            EquipmentStatus::AwaitingParts,
            EquipmentStatus::Inactive,
        ] {
            assert_eq!(EquipmentStatus::from(i16::from(status)), status);
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(EquipmentStatus::from(99), EquipmentStatus::Active);
        assert_eq!(MaintenanceKind::from(-1), MaintenanceKind::Preventive);
        assert_eq!(MaintenanceStatus::from(7), MaintenanceStatus::Open);
    }
}
