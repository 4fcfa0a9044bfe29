//! Spreadsheet ingestion for the store import tool.
//!
//! This crate opens workbooks through `calamine` and turns sheets into plain
//! rows of [`CellValue`]s with their 1-based sheet row numbers, so later
//! stages never deal with the spreadsheet library directly.
//!
//! # Features
//!
//! - **Workbook Loading**: any format calamine understands (xlsx, xlsm, xlsb, xls, ods)
//! - **Sheet Inspection**: dump the first non-empty rows of every sheet
//! - **Column Layout**: the declared store column table and header-row check
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use store_ingest::{HeaderCheck, STORE_SHEET_NAME, open_workbook, validate_header_row};
//!
//! let mut workbook = open_workbook(Path::new("vendors.xlsx"))?;
//! let sheet = workbook.sheet(STORE_SHEET_NAME)?;
//! let header = sheet.header().map(|row| row.cells.as_slice()).unwrap_or_default();
//! validate_header_row(&sheet.name, header, HeaderCheck::Strict)?;
//! ```

mod cell;
mod error;
mod inspect;
mod layout;
mod workbook;

// === Error Types ===
pub use error::{IngestError, Result};

// === Cells and Rows ===
pub use cell::CellValue;
pub use workbook::{SheetRow, SheetRows, Workbook, open_workbook};

// === Inspection ===
pub use inspect::{DEFAULT_INSPECT_ROWS, SheetDump, format_row, inspect_sheet, inspect_workbook};

// === Column Layout ===
pub use layout::{
    ColumnSpec, HeaderCheck, HeaderMismatch, STORE_COLUMNS, STORE_SHEET_NAME, StoreColumn,
    check_header_row, validate_header_row,
};
