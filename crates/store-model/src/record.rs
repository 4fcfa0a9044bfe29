//! The normalized store record.

use serde::{Deserialize, Serialize};

/// Status assigned to every imported store.
pub const STATUS_ACTIVE: &str = "active";

/// One vendor/store, as written to the intermediate JSON file.
///
/// Every optional field serializes as an explicit `null` when absent so the
/// file always carries the full key set in a stable order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    /// Spreadsheet row number ("No" column), kept as text.
    pub code: Option<String>,
    /// Trade name. Only `None` when the sheet held a placeholder.
    pub name: Option<String>,
    pub owner_name: Option<String>,
    pub business_reg_no: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub business_type: Option<String>,
    pub business_category: Option<String>,
    /// Day of month the store is billed.
    pub billing_day: Option<i64>,
    /// Opening receivable balance, truncated to whole currency units.
    #[serde(default)]
    pub outstanding_amount: i64,
    pub store_type: Option<String>,
    pub email: Option<String>,
    /// Delivery area assigned to the store.
    pub area_code: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_status() -> String {
    STATUS_ACTIVE.to_string()
}

const fn default_is_active() -> bool {
    true
}

impl StoreRecord {
    /// Create an active record with the given name and every other field empty.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            code: None,
            name: Some(name.into()),
            owner_name: None,
            business_reg_no: None,
            phone: None,
            address: None,
            business_type: None,
            business_category: None,
            billing_day: None,
            outstanding_amount: 0,
            store_type: None,
            email: None,
            area_code: None,
            status: default_status(),
            is_active: true,
        }
    }

    /// Mutable access to every optional text field, in serialization order.
    pub fn text_fields_mut(&mut self) -> [&mut Option<String>; 11] {
        [
            &mut self.code,
            &mut self.name,
            &mut self.owner_name,
            &mut self.business_reg_no,
            &mut self.phone,
            &mut self.address,
            &mut self.business_type,
            &mut self.business_category,
            &mut self.store_type,
            &mut self.email,
            &mut self.area_code,
        ]
    }

    /// Display label used in logs and summaries.
    #[must_use]
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or("<unnamed>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_active() {
        let record = StoreRecord::new("Acme Mart");
        assert_eq!(record.status, STATUS_ACTIVE);
        assert!(record.is_active);
        assert_eq!(record.outstanding_amount, 0);
        assert_eq!(record.label(), "Acme Mart");
    }

    #[test]
    fn text_fields_cover_every_optional_string() {
        let mut record = StoreRecord::new("x");
        for field in record.text_fields_mut() {
            *field = Some("v".to_string());
        }
        assert_eq!(record.code.as_deref(), Some("v"));
        assert_eq!(record.area_code.as_deref(), Some("v"));
        assert_eq!(record.email.as_deref(), Some("v"));
        assert_eq!(record.billing_day, None);
    }

    #[test]
    fn missing_constants_fall_back_on_deserialize() {
        let record: StoreRecord = serde_json::from_str(r#"{"name":"Shop"}"#).unwrap();
        assert_eq!(record.status, STATUS_ACTIVE);
        assert!(record.is_active);
        assert_eq!(record.outstanding_amount, 0);
        assert_eq!(record.code, None);
    }
}
