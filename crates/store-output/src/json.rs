//! JSON serialization of record collections.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use store_model::StoreRecord;

use crate::error::{OutputError, Result};

/// File name used when no explicit path is given.
pub const DEFAULT_RECORDS_FILE: &str = "stores_import.json";

/// Pretty-printed JSON for a record collection.
pub fn records_to_string(records: &[StoreRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Writes all records to `path`, replacing any existing file.
pub fn write_records(path: &Path, records: &[StoreRecord]) -> Result<()> {
    let io_error = |source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| OutputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_error)?;

    tracing::info!(path = %path.display(), records = records.len(), "wrote records file");
    Ok(())
}

/// Reads a record collection written by [`write_records`].
pub fn read_records(path: &Path) -> Result<Vec<StoreRecord>> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            OutputError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            OutputError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let records: Vec<StoreRecord> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| OutputError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!(path = %path.display(), records = records.len(), "read records file");
    Ok(records)
}
