//! Alert rule evaluation
//!
//! Every rule is a threshold predicate over a full-table snapshot. The
//! result is derived from scratch per request and ordered by rule then
//! entity, so repeated evaluations over the same data are identical.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::{
    api::alerts::{Alert, AlertRule},
    config::AlertsConfig,
    error::AppResult,
    models::enums::{EquipmentStatus, MaintenanceKind},
    models::Snapshot,
    repository::Repository,
    services::cache::SnapshotCache,
};

#[derive(Clone)]
pub struct AlertsService {
    repository: Repository,
    cache: SnapshotCache,
    rules: AlertsConfig,
}

impl AlertsService {
    pub fn new(repository: Repository, cache: SnapshotCache, rules: AlertsConfig) -> Self {
        Self {
            repository,
            cache,
            rules,
        }
    }

    /// Evaluate all rules against the current (possibly cached) snapshot
    pub async fn current(&self) -> AppResult<Vec<Alert>> {
        let snapshot = self.cache.get_or_refresh(&self.repository).await?;
        Ok(evaluate(&snapshot, &self.rules, Utc::now()))
    }
}

/// Run every alert rule against the snapshot as of `now`
pub fn evaluate(snapshot: &Snapshot, rules: &AlertsConfig, now: DateTime<Utc>) -> Vec<Alert> {
    let mut alerts = Vec::new();
    let window_start = now - Duration::days(rules.recurring_window_days);

    // Recurring maintenance: >= N records started within the window
    for eq in &snapshot.equipment {
        let count = snapshot
            .maintenances_for(eq.id)
            .filter(|m| m.started_at >= window_start)
            .count() as u32;
        if count >= rules.recurring_threshold {
            alerts.push(Alert {
                rule: AlertRule::RecurringMaintenance,
                message: format!(
                    "{} had {} maintenances in the last {} days",
                    eq.name, count, rules.recurring_window_days
                ),
                equipment_id: Some(eq.id),
                equipment_name: Some(eq.name.clone()),
                sector: Some(eq.sector.clone()),
                maintenance_id: None,
            });
        }
    }

    // Repeated urgent maintenance within the same window
    for eq in &snapshot.equipment {
        let count = snapshot
            .maintenances_for(eq.id)
            .filter(|m| m.kind_enum() == MaintenanceKind::Urgent && m.started_at >= window_start)
            .count() as u32;
        if count >= rules.urgent_threshold {
            alerts.push(Alert {
                rule: AlertRule::RepeatedUrgent,
                message: format!(
                    "{} had {} urgent maintenances in the last {} days",
                    eq.name, count, rules.recurring_window_days
                ),
                equipment_id: Some(eq.id),
                equipment_name: Some(eq.name.clone()),
                sector: Some(eq.sector.clone()),
                maintenance_id: None,
            });
        }
    }

    // Sector availability below the minimum
    let mut sectors: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for eq in &snapshot.equipment {
        let entry = sectors.entry(eq.sector.as_str()).or_insert((0, 0));
        entry.1 += 1;
        if eq.status_enum() == EquipmentStatus::Active {
            entry.0 += 1;
        }
    }
    for (sector, (active, total)) in sectors {
        let pct = availability_pct(active, total);
        if pct < rules.sector_availability_min_pct {
            alerts.push(Alert {
                rule: AlertRule::LowSectorAvailability,
                message: format!(
                    "Sector {} is at {:.1}% availability ({}/{} active)",
                    sector, pct, active, total
                ),
                equipment_id: None,
                equipment_name: None,
                sector: Some(sector.to_string()),
                maintenance_id: None,
            });
        }
    }

    // Open maintenances older than the stale threshold
    for m in &snapshot.maintenances {
        if !m.is_open() {
            continue;
        }
        let age = now.signed_duration_since(m.started_at);
        if age > Duration::days(rules.stale_open_days) {
            let eq = snapshot.equipment_by_id(m.equipment_id);
            alerts.push(Alert {
                rule: AlertRule::StaleOpenMaintenance,
                message: format!(
                    "Maintenance {} open for {} days",
                    m.id,
                    age.num_days()
                ),
                equipment_id: Some(m.equipment_id),
                equipment_name: eq.map(|e| e.name.clone()),
                sector: eq.map(|e| e.sector.clone()),
                maintenance_id: Some(m.id),
            });
        }
    }

    // No preventive maintenance within the gap window
    let gap_start = now - Duration::days(rules.preventive_gap_days);
    for eq in &snapshot.equipment {
        let has_recent_preventive = snapshot.maintenances_for(eq.id).any(|m| {
            m.kind_enum() == MaintenanceKind::Preventive && m.started_at >= gap_start
        });
        if !has_recent_preventive {
            alerts.push(Alert {
                rule: AlertRule::PreventiveOverdue,
                message: format!(
                    "{} has no preventive maintenance in the last {} days",
                    eq.name, rules.preventive_gap_days
                ),
                equipment_id: Some(eq.id),
                equipment_name: Some(eq.name.clone()),
                sector: Some(eq.sector.clone()),
                maintenance_id: None,
            });
        }
    }

    alerts
}

/// Active share of a sector, in percent; an empty sector counts as 0
pub fn availability_pct(active: u32, total: u32) -> f64 {
    if total == 0 {
        return 0.0;
    }
    f64::from(active) / f64::from(total) * 100.0
}
