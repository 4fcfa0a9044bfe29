//! The intermediate records file shared by the normalizer and the uploader.
//!
//! The file is a UTF-8 JSON array of `StoreRecord`s, pretty-printed with
//! two-space indentation. Non-ASCII text is written literally.

mod error;
mod json;

pub use error::{OutputError, Result};
pub use json::{DEFAULT_RECORDS_FILE, read_records, records_to_string, write_records};
