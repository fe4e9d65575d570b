//! Equipment model

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::enums::EquipmentStatus;

/// Hospital sectors offered as suggestions alongside free-text entry.
pub static PRESET_SECTORS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "ICU",
        "Emergency",
        "Surgical Center",
        "Radiology",
        "Clinical Laboratory",
        "Neonatal",
        "Cardiology",
        "Oncology",
    ]
});

/// Equipment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i32,
    /// Equipment name / description
    pub name: String,
    /// Hospital sector the equipment belongs to
    pub sector: String,
    /// Manufacturer serial number
    pub serial_number: String,
    /// Status code (0=active, 1=in maintenance, 2=awaiting parts, 3=inactive)
    pub status: i16,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Equipment {
    pub fn status_enum(&self) -> EquipmentStatus {
        EquipmentStatus::from(self.status)
    }
}

/// Create equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEquipment {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "sector is required"))]
    pub sector: String,
    #[validate(length(min = 1, message = "serial_number is required"))]
    pub serial_number: String,
}

/// Update equipment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateEquipment {
    #[validate(length(min = 3, message = "name must be at least 3 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "sector is required"))]
    pub sector: Option<String>,
    #[validate(length(min = 1, message = "serial_number is required"))]
    pub serial_number: Option<String>,
    /// Manual status change; in_maintenance is owned by the workflow and
    /// cannot be set here
    pub status: Option<EquipmentStatus>,
}

/// Equipment list filters
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct EquipmentFilter {
    pub sector: Option<String>,
    pub status: Option<EquipmentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn create_rejects_short_name() {
        let req = CreateEquipment {
            name: "MR".to_string(),
            sector: "ICU".to_string(),
            serial_number: "SN1".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn create_rejects_empty_fields() {
        let req = CreateEquipment {
            name: "Monitor A".to_string(),
            sector: String::new(),
            serial_number: String::new(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("sector"));
        assert!(fields.contains_key("serial_number"));
    }

    #[test]
    fn create_accepts_valid_request() {
        let req = CreateEquipment {
            name: "Monitor A".to_string(),
            sector: "ICU".to_string(),
            serial_number: "SN1".to_string(),
        };
        assert!(req.validate().is_ok());
    }
}
