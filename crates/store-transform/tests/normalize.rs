//! Tests for row normalization.

use proptest::prelude::*;
use store_ingest::{CellValue, SheetRow};
use store_model::StoreRecord;
use store_transform::{clean_placeholders, normalize_row, normalize_rows};

fn text(s: &str) -> CellValue {
    CellValue::Text(s.to_string())
}

fn acme_row() -> SheetRow {
    SheetRow::new(
        2,
        vec![
            text("1"),
            text("Acme Mart"),
            text("Kim"),
            text("123-45"),
            text("010 1234 5678"),
            text("010 1234 5678"),
            text("Seoul"),
            text("Gangnam"),
            text("Retail"),
            text("Grocery"),
            CellValue::Float(15.0),
            text(""),
            CellValue::Float(12000.7),
            text(""),
            text(""),
            text("a@b.com"),
            text("2020-01-01"),
            text("A"),
        ],
    )
}

#[test]
fn acme_row_normalizes() {
    let mut issues = Vec::new();
    let record = normalize_row(&acme_row(), &mut issues).expect("record");
    assert!(issues.is_empty());

    insta::assert_json_snapshot!(record, @r#"
    {
      "code": "1",
      "name": "Acme Mart",
      "ownerName": "Kim",
      "businessRegNo": "123-45",
      "phone": "010-1234-5678",
      "address": "Seoul Gangnam",
      "businessType": "Retail",
      "businessCategory": "Grocery",
      "billingDay": 15,
      "outstandingAmount": 12000,
      "storeType": "A",
      "email": "a@b.com",
      "areaCode": null,
      "status": "active",
      "isActive": true
    }
    "#);
}

#[test]
fn empty_name_produces_no_record() {
    let mut row = acme_row();
    row.cells[1] = text("");
    let report = normalize_rows([&row]);
    assert!(report.records.is_empty());
    assert_eq!(report.skipped_rows, vec![2]);
}

#[test]
fn placeholder_fields_become_null() {
    let mut row = acme_row();
    row.cells[2] = text("None");
    row.cells[3] = text(" - ");
    row.cells[14] = text("-");
    let mut issues = Vec::new();
    let record = normalize_row(&row, &mut issues).unwrap();
    assert_eq!(record.owner_name, None);
    assert_eq!(record.business_reg_no, None);
    assert_eq!(record.area_code, None);
}

#[test]
fn numeric_cells_in_text_columns_are_stringified() {
    let mut row = acme_row();
    row.cells[0] = CellValue::Float(42.0);
    row.cells[4] = CellValue::Float(215550101.0);
    row.cells[10] = text(" 25 ");
    let mut issues = Vec::new();
    let record = normalize_row(&row, &mut issues).unwrap();
    assert_eq!(record.code.as_deref(), Some("42"));
    assert_eq!(record.phone.as_deref(), Some("215550101"));
    assert_eq!(record.billing_day, Some(25));
}

fn cell_strategy() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        Just(text("None")),
        Just(text("-")),
        Just(text("  ")),
        "[a-zA-Z0-9 가-힣-]{0,12}".prop_map(CellValue::Text),
        (-1.0e6f64..1.0e6).prop_map(CellValue::Float),
    ]
}

fn row_strategy() -> impl Strategy<Value = SheetRow> {
    prop::collection::vec(cell_strategy(), 0..20).prop_map(|cells| SheetRow::new(2, cells))
}

proptest! {
    #[test]
    fn nameless_rows_never_produce_records(mut row in row_strategy()) {
        if row.cells.len() > 1 {
            row.cells[1] = CellValue::Empty;
        }
        let mut issues = Vec::new();
        prop_assert!(normalize_row(&row, &mut issues).is_none());
    }

    #[test]
    fn cleanup_is_idempotent(row in row_strategy()) {
        let mut issues = Vec::new();
        if let Some(mut record) = normalize_row(&row, &mut issues) {
            let snapshot: StoreRecord = record.clone();
            prop_assert_eq!(clean_placeholders(&mut record), 0);
            prop_assert_eq!(record, snapshot);
        }
    }

    #[test]
    fn outstanding_amount_is_always_set(row in row_strategy()) {
        let mut issues = Vec::new();
        if let Some(record) = normalize_row(&row, &mut issues) {
            let unparsable = issues.iter().any(|issue| issue.field == "outstandingAmount");
            if unparsable {
                prop_assert_eq!(record.outstanding_amount, 0);
            }
            for field in [&record.owner_name, &record.email, &record.area_code, &record.phone] {
                prop_assert!(field.as_deref().is_none_or(|v| v != "None" && v != "-"));
            }
        }
    }
}
