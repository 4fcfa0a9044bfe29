//! Workbook opening and sheet-to-row conversion.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};

use crate::cell::CellValue;
use crate::error::{IngestError, Result};

static EMPTY_CELL: CellValue = CellValue::Empty;

/// One spreadsheet row with its 1-based row number.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub number: u32,
    pub cells: Vec<CellValue>,
}

impl SheetRow {
    #[must_use]
    pub fn new(number: u32, cells: Vec<CellValue>) -> Self {
        Self { number, cells }
    }

    /// Cell at a 0-based column index; columns past the row's end are empty.
    #[must_use]
    pub fn cell(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&EMPTY_CELL)
    }

    /// True when at least one cell holds a value.
    #[must_use]
    pub fn has_values(&self) -> bool {
        self.cells.iter().any(|cell| !cell.is_blank())
    }
}

/// All rows of a single sheet, in sheet order.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRows {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

impl SheetRows {
    #[must_use]
    pub fn new(name: impl Into<String>, rows: Vec<SheetRow>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Sheet row 1, if the sheet has anything on it.
    #[must_use]
    pub fn header(&self) -> Option<&SheetRow> {
        self.rows.first().filter(|row| row.number == 1)
    }

    /// Rows below the header row.
    pub fn data_rows(&self) -> impl Iterator<Item = &SheetRow> {
        self.rows.iter().filter(|row| row.number >= 2)
    }

    fn from_range(name: &str, range: &Range<Data>) -> Self {
        let (start_row, start_col) = range.start().unwrap_or((0, 0));
        let rows = range
            .rows()
            .enumerate()
            .map(|(offset, row)| {
                // Ranges start at the first used cell; pad back to column A.
                let mut cells = vec![CellValue::Empty; start_col as usize];
                cells.extend(row.iter().map(CellValue::from));
                SheetRow::new(start_row + offset as u32 + 1, cells)
            })
            .collect();
        Self::new(name, rows)
    }
}

/// An open workbook.
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
}

/// Opens a workbook, detecting the format from the file extension.
pub fn open_workbook(path: &Path) -> Result<Workbook> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let sheets = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "opened workbook");

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

impl Workbook {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sheet names in workbook order.
    #[must_use]
    pub fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    /// Reads every row of the named sheet.
    pub fn sheet(&mut self, name: &str) -> Result<SheetRows> {
        let available = self.sheet_names();
        if !available.iter().any(|sheet| sheet == name) {
            return Err(IngestError::SheetNotFound {
                sheet: name.to_string(),
                available,
            });
        }

        let range = self
            .sheets
            .worksheet_range(name)
            .map_err(|e| IngestError::SheetRead {
                sheet: name.to_string(),
                message: e.to_string(),
            })?;

        let sheet = SheetRows::from_range(name, &range);
        tracing::debug!(sheet = name, rows = sheet.rows.len(), "read sheet");
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_past_row_end_is_empty() {
        let row = SheetRow::new(2, vec![CellValue::Int(1)]);
        assert_eq!(row.cell(0), &CellValue::Int(1));
        assert_eq!(row.cell(17), &CellValue::Empty);
    }

    #[test]
    fn test_has_values() {
        assert!(!SheetRow::new(1, vec![CellValue::Empty, CellValue::Text(String::new())]).has_values());
        assert!(SheetRow::new(1, vec![CellValue::Empty, CellValue::Int(0)]).has_values());
    }

    #[test]
    fn test_header_requires_row_one() {
        let sheet = SheetRows::new("S", vec![SheetRow::new(3, vec![CellValue::Int(1)])]);
        assert!(sheet.header().is_none());
        assert_eq!(sheet.data_rows().count(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let result = open_workbook(Path::new("/definitely/not/here.xlsx"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
