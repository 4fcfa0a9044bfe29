//! Store migration stages.
//!
//! The stages are run by hand, one command each:
//! 1. **Inspect**: Dump the first non-empty rows of every sheet
//! 2. **Normalize**: Map the store list sheet to records and write the JSON file
//! 3. **Upload**: Wrap the JSON file in an import envelope and post it
//!
//! Stages share nothing but the records file on disk.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{debug, info};

use store_ingest::{
    CellValue, HeaderCheck, HeaderMismatch, IngestError, SheetDump, inspect_workbook,
    open_workbook, validate_header_row,
};
use store_model::ImportEnvelope;
use store_output::read_records;
use store_transform::{NormalizeReport, normalize_rows};
use store_upload::UploadConfig;

// ============================================================================
// Stage 1: Inspect
// ============================================================================

/// Dump every sheet of a workbook.
pub fn inspect(workbook_path: &Path, max_rows: usize) -> Result<Vec<SheetDump>> {
    let mut workbook = open_workbook(workbook_path)
        .with_context(|| format!("open workbook {}", workbook_path.display()))?;
    let dumps = inspect_workbook(&mut workbook, max_rows).context("read sheets")?;
    info!(
        workbook = %workbook_path.display(),
        sheets = dumps.len(),
        "inspect complete"
    );
    Ok(dumps)
}

// ============================================================================
// Stage 2: Normalize
// ============================================================================

/// Result of the normalize stage, before anything is written.
#[derive(Debug)]
pub struct NormalizedSheet {
    /// Sheet the records were read from.
    pub sheet: String,
    /// Header row as found in the sheet.
    pub headers: Vec<CellValue>,
    /// Header mismatches tolerated in lenient mode.
    pub header_mismatches: Vec<HeaderMismatch>,
    pub report: NormalizeReport,
}

/// Read the store list sheet and normalize its rows.
///
/// The header row is checked against the declared layout before any data
/// row is touched.
pub fn normalize_workbook(
    workbook_path: &Path,
    sheet_name: &str,
    header_check: HeaderCheck,
) -> Result<NormalizedSheet> {
    let start = Instant::now();
    let mut workbook = open_workbook(workbook_path)
        .with_context(|| format!("open workbook {}", workbook_path.display()))?;
    let sheet = workbook.sheet(sheet_name)?;

    let headers = sheet
        .header()
        .map(|row| row.cells.clone())
        .ok_or_else(|| IngestError::MissingHeaderRow {
            sheet: sheet.name.clone(),
        })?;
    let header_mismatches = validate_header_row(&sheet.name, &headers, header_check)?;
    debug!(sheet = %sheet.name, columns = headers.len(), "header row accepted");

    let report = normalize_rows(sheet.data_rows());
    info!(
        sheet = %sheet.name,
        records = report.records.len(),
        skipped = report.skipped_rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "normalize complete"
    );

    Ok(NormalizedSheet {
        sheet: sheet.name,
        headers,
        header_mismatches,
        report,
    })
}

// ============================================================================
// Stage 3: Upload
// ============================================================================

/// Resolve upload settings: defaults, then the config file, then flags.
pub fn resolve_upload_config(
    config_path: Option<&Path>,
    url: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<UploadConfig> {
    let mut config = match config_path {
        Some(path) => UploadConfig::load(path)?,
        None => UploadConfig::default(),
    };
    if let Some(url) = url {
        config = config.with_endpoint(url);
    }
    if let Some(timeout_secs) = timeout_secs {
        config = config.with_timeout_secs(timeout_secs);
    }
    config.endpoint_url().context("check upload endpoint")?;
    Ok(config)
}

/// Read the records file and wrap it in a full-replace envelope.
pub fn load_envelope(input: &Path) -> Result<ImportEnvelope> {
    let records =
        read_records(input).with_context(|| format!("read records {}", input.display()))?;
    Ok(ImportEnvelope::replace_all(records))
}
