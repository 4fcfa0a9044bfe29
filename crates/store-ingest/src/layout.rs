//! Declared column layout of the store list sheet.
//!
//! Column positions are fixed by the source workbook. Each mapped column also
//! declares the header label it is expected to carry, so a reshuffled sheet is
//! caught at load time instead of silently filling the wrong fields.

use std::fmt;

use crate::cell::CellValue;
use crate::error::{IngestError, Result};

/// Sheet holding the store list.
pub const STORE_SHEET_NAME: &str = "거래처List";

/// Fields read from the store list sheet.
///
/// Variants are declared in the same order as [`STORE_COLUMNS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreColumn {
    Code,
    Name,
    OwnerName,
    BusinessRegNo,
    Phone,
    AddressLine1,
    AddressLine2,
    BusinessType,
    BusinessCategory,
    BillingDay,
    OpeningBalance,
    AreaCode,
    Email,
    StoreType,
}

/// Position and expected header label of one mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub column: StoreColumn,
    /// 0-based column index.
    pub index: usize,
    /// Expected header text; `None` means the header is not checked.
    pub header: Option<&'static str>,
}

const fn spec(column: StoreColumn, index: usize, header: Option<&'static str>) -> ColumnSpec {
    ColumnSpec {
        column,
        index,
        header,
    }
}

/// The store list layout.
///
/// Unmapped columns: 5 (mobile), 11 (license), 13 (price policy),
/// 16 (registration date). The two address columns carry no stable header.
pub const STORE_COLUMNS: [ColumnSpec; 14] = [
    spec(StoreColumn::Code, 0, Some("No")),
    spec(StoreColumn::Name, 1, Some("상호")),
    spec(StoreColumn::OwnerName, 2, Some("대표자")),
    spec(StoreColumn::BusinessRegNo, 3, Some("사업자번호")),
    spec(StoreColumn::Phone, 4, Some("전화번호")),
    spec(StoreColumn::AddressLine1, 6, None),
    spec(StoreColumn::AddressLine2, 7, None),
    spec(StoreColumn::BusinessType, 8, Some("업태")),
    spec(StoreColumn::BusinessCategory, 9, Some("업종")),
    spec(StoreColumn::BillingDay, 10, Some("청구일")),
    spec(StoreColumn::OpeningBalance, 12, Some("초기잔액")),
    spec(StoreColumn::AreaCode, 14, Some("배송담당")),
    spec(StoreColumn::Email, 15, Some("E-Mail")),
    spec(StoreColumn::StoreType, 17, Some("거래처유형")),
];

impl StoreColumn {
    /// Layout entry for this column.
    #[must_use]
    pub fn spec(self) -> &'static ColumnSpec {
        &STORE_COLUMNS[self as usize]
    }

    /// 0-based column index in the sheet.
    #[must_use]
    pub fn index(self) -> usize {
        self.spec().index
    }
}

/// How to react when the header row does not match the layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderCheck {
    /// Abort the load.
    #[default]
    Strict,
    /// Log each mismatch and keep the positional mapping.
    Lenient,
}

/// A header cell that does not carry the expected label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderMismatch {
    pub index: usize,
    pub expected: &'static str,
    pub found: String,
}

impl fmt::Display for HeaderMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "column {}: expected '{}', found '{}'",
            self.index, self.expected, self.found
        )
    }
}

fn normalize_header(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Compares a header row against the declared labels.
///
/// Whitespace and ASCII case are ignored. Missing header cells count as
/// mismatches.
#[must_use]
pub fn check_header_row(headers: &[CellValue]) -> Vec<HeaderMismatch> {
    STORE_COLUMNS
        .iter()
        .filter_map(|spec| {
            let expected = spec.header?;
            let found = headers
                .get(spec.index)
                .map(ToString::to_string)
                .unwrap_or_default();
            (normalize_header(&found) != normalize_header(expected)).then(|| HeaderMismatch {
                index: spec.index,
                expected,
                found,
            })
        })
        .collect()
}

/// Checks the header row and applies the given policy.
///
/// Returns the mismatches that were tolerated in lenient mode.
pub fn validate_header_row(
    sheet: &str,
    headers: &[CellValue],
    mode: HeaderCheck,
) -> Result<Vec<HeaderMismatch>> {
    let mismatches = check_header_row(headers);
    if mismatches.is_empty() {
        return Ok(mismatches);
    }

    match mode {
        HeaderCheck::Strict => Err(IngestError::HeaderMismatch {
            sheet: sheet.to_string(),
            mismatches,
        }),
        HeaderCheck::Lenient => {
            for mismatch in &mismatches {
                tracing::warn!(
                    sheet,
                    column = mismatch.index,
                    expected = mismatch.expected,
                    found = %mismatch.found,
                    "header does not match layout, keeping positional mapping"
                );
            }
            Ok(mismatches)
        }
    }
}
