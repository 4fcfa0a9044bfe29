//! Text field rules.

use store_ingest::CellValue;

/// Placeholder written in place of a missing phone number.
const PHONE_PLACEHOLDER: &str = "-";

/// Trimmed text of a present cell; blank results are absent.
///
/// A whitespace-only cell yields `None`, never `""`, so the records file
/// carries `null` for it. The import route stores an empty string as null
/// too, so the imported store is the same either way.
pub fn text_field(cell: &CellValue) -> Option<String> {
    let text = cell.to_text()?;
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Store code: the cell text as-is, without trimming.
pub fn code_field(cell: &CellValue) -> Option<String> {
    cell.to_text()
}

/// Phone number with spaces turned into dashes (`010 1234 5678` → `010-1234-5678`).
pub fn phone_field(cell: &CellValue) -> Option<String> {
    text_field(cell)
        .filter(|phone| phone != PHONE_PLACEHOLDER)
        .map(|phone| phone.replace(' ', "-"))
}

/// Two address parts joined by a single space.
pub fn address_field(line1: &CellValue, line2: &CellValue) -> Option<String> {
    let line1 = text_field(line1).unwrap_or_default();
    let line2 = text_field(line2).unwrap_or_default();
    if line1.is_empty() && line2.is_empty() {
        return None;
    }
    Some(format!("{line1} {line2}").trim().to_string())
}
