//! Full-table snapshot handed to the alert and stats engines

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{equipment::Equipment, maintenance::Maintenance};

/// Point-in-time copy of both tables.
///
/// Alerts and dashboard figures are derived from a snapshot and discarded
/// after the response; nothing computed from it is persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub equipment: Vec<Equipment>,
    pub maintenances: Vec<Maintenance>,
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(equipment: Vec<Equipment>, maintenances: Vec<Maintenance>) -> Self {
        Self {
            equipment,
            maintenances,
            taken_at: Utc::now(),
        }
    }

    /// Maintenances belonging to one equipment
    pub fn maintenances_for(&self, equipment_id: i32) -> impl Iterator<Item = &Maintenance> {
        self.maintenances
            .iter()
            .filter(move |m| m.equipment_id == equipment_id)
    }

    pub fn equipment_by_id(&self, equipment_id: i32) -> Option<&Equipment> {
        self.equipment.iter().find(|e| e.id == equipment_id)
    }
}
