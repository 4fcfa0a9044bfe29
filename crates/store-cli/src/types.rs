use std::path::PathBuf;

use store_upload::UploadOutcome;

#[derive(Debug)]
pub struct NormalizeResult {
    pub sheet: String,
    pub output: PathBuf,
    pub records: usize,
    pub skipped_rows: Vec<u32>,
    pub parse_issues: usize,
    pub header_mismatches: usize,
}

#[derive(Debug)]
pub struct UploadResult {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub body_preview_chars: usize,
    /// `None` for a dry run.
    pub outcome: Option<UploadOutcome>,
}
