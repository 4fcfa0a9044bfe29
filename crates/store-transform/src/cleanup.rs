//! Placeholder cleanup applied to finished records.

use store_model::StoreRecord;

/// Text values that stand for "no value" in the source sheet.
pub const PLACEHOLDER_VALUES: [&str; 2] = ["None", "-"];

#[must_use]
pub fn is_placeholder(value: &str) -> bool {
    PLACEHOLDER_VALUES.contains(&value)
}

/// Clears every text field holding a placeholder. Returns how many were cleared.
///
/// Applying it twice changes nothing the second time.
pub fn clean_placeholders(record: &mut StoreRecord) -> usize {
    let mut cleared = 0;
    for field in record.text_fields_mut() {
        if field.as_deref().is_some_and(is_placeholder) {
            *field = None;
            cleared += 1;
        }
    }
    cleared
}
