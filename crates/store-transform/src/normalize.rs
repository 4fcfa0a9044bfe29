//! Row normalization.

use store_ingest::{SheetRow, StoreColumn};
use store_model::StoreRecord;

use crate::cleanup::clean_placeholders;
use crate::fields::{address_field, code_field, phone_field, text_field};
use crate::parse::{FieldParse, parse_amount, parse_integer};

/// A numeric cell that could not be read and fell back to its default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIssue {
    pub row: u32,
    pub field: &'static str,
    pub raw: String,
}

/// Result of normalizing a whole sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Records in sheet row order.
    pub records: Vec<StoreRecord>,
    /// Row numbers dropped for lacking a name.
    pub skipped_rows: Vec<u32>,
    pub parse_issues: Vec<ParseIssue>,
}

fn note_issue<T>(
    parsed: &FieldParse<T>,
    row: u32,
    field: &'static str,
    issues: &mut Vec<ParseIssue>,
) {
    if let FieldParse::Unparsable(raw) = parsed {
        tracing::debug!(row, field, "unparsable number, using default");
        issues.push(ParseIssue {
            row,
            field,
            raw: raw.clone(),
        });
    }
}

/// Builds a record from one sheet row.
///
/// Returns `None` when the name cell is empty after trimming. Numeric fields
/// that cannot be read are recorded in `issues` and never fail the row.
pub fn normalize_row(row: &SheetRow, issues: &mut Vec<ParseIssue>) -> Option<StoreRecord> {
    let cell = |column: StoreColumn| row.cell(column.index());

    let name = text_field(cell(StoreColumn::Name))?;

    let billing_day = parse_integer(cell(StoreColumn::BillingDay));
    note_issue(&billing_day, row.number, "billingDay", issues);
    let outstanding_amount = parse_amount(cell(StoreColumn::OpeningBalance));
    note_issue(&outstanding_amount, row.number, "outstandingAmount", issues);

    let mut record = StoreRecord {
        code: code_field(cell(StoreColumn::Code)),
        owner_name: text_field(cell(StoreColumn::OwnerName)),
        business_reg_no: text_field(cell(StoreColumn::BusinessRegNo)),
        phone: phone_field(cell(StoreColumn::Phone)),
        address: address_field(
            cell(StoreColumn::AddressLine1),
            cell(StoreColumn::AddressLine2),
        ),
        business_type: text_field(cell(StoreColumn::BusinessType)),
        business_category: text_field(cell(StoreColumn::BusinessCategory)),
        billing_day: billing_day.value(),
        outstanding_amount: outstanding_amount.value_or(0),
        store_type: text_field(cell(StoreColumn::StoreType)),
        email: text_field(cell(StoreColumn::Email)),
        area_code: text_field(cell(StoreColumn::AreaCode)),
        ..StoreRecord::new(name)
    };

    clean_placeholders(&mut record);
    if record.name.is_none() {
        tracing::warn!(row = row.number, "store name is a placeholder, record kept without name");
    }

    Some(record)
}

/// Normalizes data rows in order, dropping nameless ones.
pub fn normalize_rows<'a>(rows: impl IntoIterator<Item = &'a SheetRow>) -> NormalizeReport {
    let mut report = NormalizeReport::default();
    for row in rows {
        match normalize_row(row, &mut report.parse_issues) {
            Some(record) => report.records.push(record),
            None => {
                tracing::debug!(row = row.number, "skipping row without store name");
                report.skipped_rows.push(row.number);
            }
        }
    }
    tracing::info!(
        records = report.records.len(),
        skipped = report.skipped_rows.len(),
        parse_issues = report.parse_issues.len(),
        "normalized store rows"
    );
    report
}
