//! Diagnostic dumps of workbook contents.
//!
//! Used to work out which column holds which field before a layout is
//! declared; nothing here is consumed programmatically.

use crate::cell::CellValue;
use crate::error::Result;
use crate::workbook::{SheetRow, SheetRows, Workbook};

/// Number of non-empty rows dumped per sheet by default.
pub const DEFAULT_INSPECT_ROWS: usize = 30;

/// Marker printed for empty cells inside a non-empty row.
const NO_VALUE: &str = "None";

/// The first non-empty rows of one sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetDump {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

/// Keeps the first `max_rows` rows of `sheet` that hold at least one value.
#[must_use]
pub fn inspect_sheet(sheet: &SheetRows, max_rows: usize) -> SheetDump {
    SheetDump {
        name: sheet.name.clone(),
        rows: sheet
            .rows
            .iter()
            .filter(|row| row.has_values())
            .take(max_rows)
            .cloned()
            .collect(),
    }
}

/// Dumps every sheet of the workbook, in workbook order.
pub fn inspect_workbook(workbook: &mut Workbook, max_rows: usize) -> Result<Vec<SheetDump>> {
    let mut dumps = Vec::new();
    for name in workbook.sheet_names() {
        let sheet = workbook.sheet(&name)?;
        dumps.push(inspect_sheet(&sheet, max_rows));
    }
    tracing::debug!(
        path = %workbook.path().display(),
        sheets = dumps.len(),
        "inspected workbook"
    );
    Ok(dumps)
}

/// Renders a row as `row N: [cell, cell, ...]`.
///
/// Text cells are quoted so leading and trailing whitespace stays visible.
#[must_use]
pub fn format_row(row: &SheetRow) -> String {
    let cells = row
        .cells
        .iter()
        .map(|cell| match cell {
            CellValue::Empty => NO_VALUE.to_string(),
            CellValue::Text(s) => format!("{s:?}"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("row {}: [{cells}]", row.number)
}
