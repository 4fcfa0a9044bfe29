use anyhow::{Context, Result};
use tracing::{debug, error, info, info_span, trace};

use store_cli::logging::redact_value;
use store_cli::pipeline::{
    NormalizedSheet, inspect, load_envelope, normalize_workbook, resolve_upload_config,
};
use store_ingest::{HeaderCheck, SheetRow, format_row};
use store_output::{records_to_string, write_records};
use store_upload::ImportClient;

use crate::cli::{InspectArgs, NormalizeArgs, UploadArgs};
use crate::types::{NormalizeResult, UploadResult};

/// Records echoed to the console before the output file is written.
const SAMPLE_RECORDS: usize = 3;

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let span = info_span!("inspect", workbook = %args.workbook.display());
    let _guard = span.enter();
    let dumps = inspect(&args.workbook, args.max_rows)?;
    for dump in dumps {
        println!();
        println!("=== {} ===", dump.name);
        for row in &dump.rows {
            println!("{}", format_row(row));
        }
    }
    Ok(())
}

pub fn run_normalize(args: &NormalizeArgs) -> Result<NormalizeResult> {
    let span = info_span!(
        "normalize",
        workbook = %args.workbook.display(),
        sheet = %args.sheet
    );
    let _guard = span.enter();
    let header_check = if args.lenient_headers {
        HeaderCheck::Lenient
    } else {
        HeaderCheck::Strict
    };

    let NormalizedSheet {
        sheet,
        headers,
        header_mismatches,
        report,
    } = normalize_workbook(&args.workbook, &args.sheet, header_check)?;

    println!("Headers: {}", format_row(&SheetRow::new(1, headers)));
    println!("Stores: {}", report.records.len());
    for issue in &report.parse_issues {
        debug!(
            row = issue.row,
            field = issue.field,
            raw = redact_value(&issue.raw),
            "numeric field defaulted"
        );
    }

    for record in &report.records {
        trace!(
            code = record.code.as_deref(),
            name = redact_value(record.label()),
            "normalized store"
        );
    }

    let sample_len = report.records.len().min(SAMPLE_RECORDS);
    if sample_len > 0 {
        let sample = records_to_string(&report.records[..sample_len])
            .context("render sample records")?;
        println!("First {sample_len}:");
        println!("{sample}");
    }

    write_records(&args.output, &report.records)
        .with_context(|| format!("write {}", args.output.display()))?;
    info!(
        output = %args.output.display(),
        records = report.records.len(),
        "records written"
    );

    Ok(NormalizeResult {
        sheet,
        output: args.output.clone(),
        records: report.records.len(),
        skipped_rows: report.skipped_rows,
        parse_issues: report.parse_issues.len(),
        header_mismatches: header_mismatches.len(),
    })
}

pub fn run_upload(args: &UploadArgs) -> Result<UploadResult> {
    let span = info_span!("upload", input = %args.input.display());
    let _guard = span.enter();
    let config = resolve_upload_config(
        args.config.as_deref(),
        args.url.as_deref(),
        args.timeout_secs,
    )?;
    let envelope = load_envelope(&args.input)?;
    println!("Input: {}", args.input.display());
    println!("Stores: {}", envelope.len());
    info!(records = envelope.len(), "envelope ready");

    let mut result = UploadResult {
        endpoint: config.endpoint.clone(),
        timeout_secs: config.timeout_secs,
        body_preview_chars: config.body_preview_chars,
        outcome: None,
    };
    if args.dry_run {
        info!(endpoint = %config.endpoint, "dry run, nothing sent");
        return Ok(result);
    }

    let client = ImportClient::new(&config)?;
    let outcome = match client.send(&envelope) {
        Ok(outcome) => outcome,
        Err(error) => {
            error!(transport = error.is_transport(), "upload failed, not retried");
            let hint = error.user_message().to_string();
            return Err(anyhow::Error::new(error)
                .context(format!("post to {}", client.endpoint()))
                .context(hint));
        }
    };
    if let Some(reply) = outcome.reply() {
        info!(
            success = reply.success,
            deleted = reply.deleted_count,
            inserted = reply.inserted_count,
            skipped = reply.skipped_count,
            "import reply"
        );
    } else if outcome.is_success() {
        debug!(status = outcome.status, "reply body is not an import summary");
    }
    result.outcome = Some(outcome);
    Ok(result)
}
