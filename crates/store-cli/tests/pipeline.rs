//! Stage tests against generated workbooks and scratch files.

use std::path::Path;

use rust_xlsxwriter::Workbook as XlsxWriter;
use tempfile::TempDir;

use store_cli::pipeline::{
    inspect, load_envelope, normalize_workbook, resolve_upload_config,
};
use store_ingest::{HeaderCheck, IngestError, STORE_SHEET_NAME};
use store_output::write_records;
use store_upload::{DEFAULT_BODY_PREVIEW_CHARS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};

const HEADERS: [&str; 18] = [
    "No", "상호", "대표자", "사업자번호", "전화번호", "HP", "", "", "업태", "업종", "청구일",
    "마이선스", "초기잔액", "가격정책", "배송담당", "E-Mail", "등록일", "거래처유형",
];

fn write_store_book(path: &Path, headers: &[&str]) {
    let mut book = XlsxWriter::new();
    let sheet = book.add_worksheet();
    sheet.set_name(STORE_SHEET_NAME).unwrap();
    for (col, header) in headers.iter().enumerate() {
        if !header.is_empty() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
    }

    sheet.write_number(1, 0, 7.0).unwrap();
    sheet.write_string(1, 1, "  Acme  ").unwrap();
    sheet.write_string(1, 4, "02 123-4567").unwrap();
    sheet.write_string(1, 6, "Seoul").unwrap();
    sheet.write_string(1, 7, "Gangnam 1").unwrap();
    sheet.write_number(1, 10, 25.0).unwrap();
    sheet.write_number(1, 12, 15000.9).unwrap();
    sheet.write_string(1, 14, "-").unwrap();

    sheet.write_number(2, 0, 8.0).unwrap();
    sheet.write_string(2, 1, "   ").unwrap();

    sheet.write_number(3, 0, 9.0).unwrap();
    sheet.write_string(3, 1, "Beta").unwrap();
    sheet.write_string(3, 10, "end of month").unwrap();

    book.save(path).unwrap();
}

#[test]
fn normalizes_store_sheet_end_to_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stores.xlsx");
    write_store_book(&path, &HEADERS);

    let normalized = normalize_workbook(&path, STORE_SHEET_NAME, HeaderCheck::Strict).unwrap();
    assert_eq!(normalized.sheet, STORE_SHEET_NAME);
    assert!(normalized.header_mismatches.is_empty());

    let report = normalized.report;
    assert_eq!(report.skipped_rows, vec![3]);
    assert_eq!(report.records.len(), 2);

    let acme = &report.records[0];
    assert_eq!(acme.name.as_deref(), Some("Acme"));
    assert_eq!(acme.code.as_deref(), Some("7"));
    assert_eq!(acme.phone.as_deref(), Some("02-123-4567"));
    assert_eq!(acme.address.as_deref(), Some("Seoul Gangnam 1"));
    assert_eq!(acme.billing_day, Some(25));
    assert_eq!(acme.outstanding_amount, 15000);
    assert_eq!(acme.area_code, None);
    assert!(acme.is_active);

    let beta = &report.records[1];
    assert_eq!(beta.name.as_deref(), Some("Beta"));
    assert_eq!(beta.billing_day, None);
    assert_eq!(beta.outstanding_amount, 0);
    assert_eq!(report.parse_issues.len(), 1);
    assert_eq!(report.parse_issues[0].row, 4);
    assert_eq!(report.parse_issues[0].field, "billingDay");
}

#[test]
fn strict_headers_reject_shifted_layout() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shifted.xlsx");
    let mut headers = HEADERS;
    headers[1] = "거래처명";
    headers[15] = "Mail";
    write_store_book(&path, &headers);

    let error = normalize_workbook(&path, STORE_SHEET_NAME, HeaderCheck::Strict).unwrap_err();
    match error.downcast_ref::<IngestError>() {
        Some(IngestError::HeaderMismatch { mismatches, .. }) => {
            let indexes: Vec<usize> = mismatches.iter().map(|m| m.index).collect();
            assert_eq!(indexes, vec![1, 15]);
        }
        other => panic!("expected header mismatch, got {other:?}"),
    }

    let lenient = normalize_workbook(&path, STORE_SHEET_NAME, HeaderCheck::Lenient).unwrap();
    assert_eq!(lenient.header_mismatches.len(), 2);
    assert_eq!(lenient.report.records.len(), 2);
}

#[test]
fn missing_sheet_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stores.xlsx");
    write_store_book(&path, &HEADERS);

    let error = normalize_workbook(&path, "Sheet9", HeaderCheck::Strict).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<IngestError>(),
        Some(IngestError::SheetNotFound { .. })
    ));
}

#[test]
fn inspect_keeps_blank_name_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stores.xlsx");
    write_store_book(&path, &HEADERS);

    let dumps = inspect(&path, 2).unwrap();
    assert_eq!(dumps.len(), 1);
    let numbers: Vec<u32> = dumps[0].rows.iter().map(|row| row.number).collect();
    assert_eq!(numbers, vec![1, 2]);
}

#[test]
fn upload_config_uses_defaults_without_file() {
    let config = resolve_upload_config(None, None, None).unwrap();
    assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    assert_eq!(config.body_preview_chars, DEFAULT_BODY_PREVIEW_CHARS);
}

#[test]
fn upload_flags_override_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("upload.toml");
    std::fs::write(
        &path,
        "endpoint = \"https://erp.example.com/api/stores/import\"\ntimeout_secs = 60\n",
    )
    .unwrap();

    let from_file = resolve_upload_config(Some(&path), None, None).unwrap();
    assert_eq!(from_file.endpoint, "https://erp.example.com/api/stores/import");
    assert_eq!(from_file.timeout_secs, 60);
    assert_eq!(from_file.body_preview_chars, DEFAULT_BODY_PREVIEW_CHARS);

    let overridden =
        resolve_upload_config(Some(&path), Some("http://127.0.0.1:9/import"), Some(5)).unwrap();
    assert_eq!(overridden.endpoint, "http://127.0.0.1:9/import");
    assert_eq!(overridden.timeout_secs, 5);
}

#[test]
fn upload_rejects_non_http_endpoint() {
    assert!(resolve_upload_config(None, Some("ftp://example.com/import"), None).is_err());
}

#[test]
fn empty_records_file_still_replaces_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stores_import.json");
    write_records(&path, &[]).unwrap();

    let envelope = load_envelope(&path).unwrap();
    assert!(envelope.is_empty());
    assert!(envelope.delete_existing);
}

#[test]
fn missing_records_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    assert!(load_envelope(&dir.path().join("absent.json")).is_err());
}
