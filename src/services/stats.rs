//! Dashboard aggregation
//!
//! All figures are grouped and counted over a full-table snapshot and
//! discarded after the response; nothing is persisted or updated
//! incrementally.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::{
    api::stats::{
        EquipmentStats, MaintenanceStats, SectorAvailability, StatEntry, StatsResponse,
    },
    error::AppResult,
    models::enums::{EquipmentStatus, MaintenanceStatus},
    models::Snapshot,
    repository::Repository,
    services::alerts::availability_pct,
    services::cache::SnapshotCache,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
    cache: SnapshotCache,
}

impl StatsService {
    pub fn new(repository: Repository, cache: SnapshotCache) -> Self {
        Self { repository, cache }
    }

    /// Dashboard figures from the current (possibly cached) snapshot
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let snapshot = self.cache.get_or_refresh(&self.repository).await?;
        Ok(compute(&snapshot))
    }
}

/// Compute every dashboard figure from one snapshot
pub fn compute(snapshot: &Snapshot) -> StatsResponse {
    let total_equipment = snapshot.equipment.len() as i64;
    let active = count_equipment(snapshot, EquipmentStatus::Active);
    let in_maintenance = count_equipment(snapshot, EquipmentStatus::InMaintenance);

    let equipment_by_status = group_counts(
        snapshot
            .equipment
            .iter()
            .map(|e| e.status_enum().to_string()),
    );
    let equipment_by_sector = group_counts(snapshot.equipment.iter().map(|e| e.sector.clone()));

    let total_maintenances = snapshot.maintenances.len() as i64;
    let open = snapshot
        .maintenances
        .iter()
        .filter(|m| m.status_enum() == MaintenanceStatus::Open)
        .count() as i64;
    let closed = total_maintenances - open;

    let maintenances_by_kind = group_counts(
        snapshot
            .maintenances
            .iter()
            .map(|m| m.kind_enum().to_string()),
    );
    // Sector comes from the owning equipment; orphaned records group as unknown
    let maintenances_by_sector = group_counts(snapshot.maintenances.iter().map(|m| {
        snapshot
            .equipment_by_id(m.equipment_id)
            .map(|e| e.sector.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }));

    let mean_time_to_resolve_hours = mean_time_to_resolve(snapshot);

    let mut sector_map: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for eq in &snapshot.equipment {
        let entry = sector_map.entry(eq.sector.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if eq.status_enum() == EquipmentStatus::Active {
            entry.0 += 1;
        }
    }
    let sectors = sector_map
        .into_iter()
        .map(|(sector, (sector_active, sector_total))| SectorAvailability {
            sector: sector.to_string(),
            total: i64::from(sector_total),
            active: i64::from(sector_active),
            availability_pct: availability_pct(sector_active, sector_total),
        })
        .collect();

    StatsResponse {
        equipment: EquipmentStats {
            total: total_equipment,
            active,
            in_maintenance,
            pct_active: share_pct(active, total_equipment),
            by_status: equipment_by_status,
            by_sector: equipment_by_sector,
        },
        maintenances: MaintenanceStats {
            total: total_maintenances,
            open,
            closed,
            pct_closed: share_pct(closed, total_maintenances),
            by_kind: maintenances_by_kind,
            by_sector: maintenances_by_sector,
            mean_time_to_resolve_hours,
        },
        sectors,
    }
}

fn count_equipment(snapshot: &Snapshot, status: EquipmentStatus) -> i64 {
    snapshot
        .equipment
        .iter()
        .filter(|e| e.status_enum() == status)
        .count() as i64
}

/// Count occurrences per label, largest first (ties by label)
fn group_counts(labels: impl Iterator<Item = String>) -> Vec<StatEntry> {
    let mut counts: IndexMap<String, i64> = IndexMap::new();
    for label in labels {
        *counts.entry(label).or_insert(0) += 1;
    }
    let mut entries: Vec<StatEntry> = counts
        .into_iter()
        .map(|(label, value)| StatEntry { label, value })
        .collect();
    entries.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    entries
}

fn share_pct(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    part as f64 / total as f64 * 100.0
}

/// Average started-to-finished duration over closed records, in hours
fn mean_time_to_resolve(snapshot: &Snapshot) -> Option<f64> {
    let durations: Vec<f64> = snapshot
        .maintenances
        .iter()
        .filter(|m| m.status_enum() == MaintenanceStatus::Closed)
        .filter_map(|m| {
            m.finished_at
                .map(|end| end.signed_duration_since(m.started_at).num_seconds() as f64 / 3600.0)
        })
        .collect();
    if durations.is_empty() {
        return None;
    }
    Some(durations.iter().sum::<f64>() / durations.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::MaintenanceKind;
    use crate::models::{Equipment, Maintenance};
    use chrono::{Duration, TimeZone, Utc};

    fn equipment(id: i32, sector: &str, status: EquipmentStatus) -> Equipment {
        Equipment {
            id,
            name: format!("Equipment {}", id),
            sector: sector.to_string(),
            serial_number: format!("SN{}", id),
            status: status.into(),
            created_at: None,
            updated_at: None,
        }
    }

    fn closed_maintenance(id: i32, equipment_id: i32, hours: i64) -> Maintenance {
        let started_at = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
        Maintenance {
            id,
            equipment_id,
            kind: MaintenanceKind::Corrective.into(),
            description: "Routine work".to_string(),
            started_at,
            finished_at: Some(started_at + Duration::hours(hours)),
            status: MaintenanceStatus::Closed.into(),
        }
    }

    fn open_maintenance(id: i32, equipment_id: i32) -> Maintenance {
        Maintenance {
            id,
            equipment_id,
            kind: MaintenanceKind::Preventive.into(),
            description: "Routine work".to_string(),
            started_at: Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap(),
            finished_at: None,
            status: MaintenanceStatus::Open.into(),
        }
    }

    #[test]
    fn empty_snapshot_yields_zeroes_not_division_errors() {
        let stats = compute(&Snapshot::new(Vec::new(), Vec::new()));
        assert_eq!(stats.equipment.total, 0);
        assert_eq!(stats.equipment.pct_active, 0.0);
        assert_eq!(stats.maintenances.pct_closed, 0.0);
        assert!(stats.maintenances.mean_time_to_resolve_hours.is_none());
        assert!(stats.sectors.is_empty());
    }

    #[test]
    fn equipment_counts_and_percentage() {
        let snap = Snapshot::new(
            vec![
                equipment(1, "ICU", EquipmentStatus::Active),
                equipment(2, "ICU", EquipmentStatus::InMaintenance),
                equipment(3, "Radiology", EquipmentStatus::Active),
                equipment(4, "Radiology", EquipmentStatus::Inactive),
            ],
            vec![],
        );
        let stats = compute(&snap);
        assert_eq!(stats.equipment.total, 4);
        assert_eq!(stats.equipment.active, 2);
        assert_eq!(stats.equipment.in_maintenance, 1);
        assert_eq!(stats.equipment.pct_active, 50.0);
    }

    #[test]
    fn sector_availability_is_exact() {
        let snap = Snapshot::new(
            vec![
                equipment(1, "ICU", EquipmentStatus::Active),
                equipment(2, "ICU", EquipmentStatus::Active),
                equipment(3, "ICU", EquipmentStatus::Active),
                equipment(4, "ICU", EquipmentStatus::InMaintenance),
                equipment(5, "Radiology", EquipmentStatus::InMaintenance),
            ],
            vec![],
        );
        let stats = compute(&snap);
        assert_eq!(stats.sectors.len(), 2);
        let icu = &stats.sectors[0];
        assert_eq!(icu.sector, "ICU");
        assert_eq!(icu.availability_pct, 75.0);
        let radiology = &stats.sectors[1];
        assert_eq!(radiology.availability_pct, 0.0);
    }

    #[test]
    fn maintenance_counts_and_grouping() {
        let snap = Snapshot::new(
            vec![
                equipment(1, "ICU", EquipmentStatus::InMaintenance),
                equipment(2, "Radiology", EquipmentStatus::Active),
            ],
            vec![
                open_maintenance(1, 1),
                closed_maintenance(2, 1, 24),
                closed_maintenance(3, 2, 48),
            ],
        );
        let stats = compute(&snap);
        assert_eq!(stats.maintenances.total, 3);
        assert_eq!(stats.maintenances.open, 1);
        assert_eq!(stats.maintenances.closed, 2);

        let by_sector = &stats.maintenances.by_sector;
        assert_eq!(by_sector[0].label, "ICU");
        assert_eq!(by_sector[0].value, 2);
        assert_eq!(by_sector[1].label, "Radiology");
        assert_eq!(by_sector[1].value, 1);
    }

    #[test]
    fn mean_time_to_resolve_averages_closed_only() {
        let snap = Snapshot::new(
            vec![equipment(1, "ICU", EquipmentStatus::InMaintenance)],
            vec![
                closed_maintenance(1, 1, 24),
                closed_maintenance(2, 1, 48),
                open_maintenance(3, 1),
            ],
        );
        let stats = compute(&snap);
        assert_eq!(stats.maintenances.mean_time_to_resolve_hours, Some(36.0));
    }

    #[test]
    fn group_counts_sorts_by_value_then_label() {
        let entries = group_counts(
            ["b", "a", "a", "c", "b"].iter().map(|s| s.to_string()),
        );
        let labels: Vec<&str> = entries.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert_eq!(entries[0].value, 2);
        assert_eq!(entries[2].value, 1);
    }
}
