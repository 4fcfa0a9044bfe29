//! Normalization of store list rows into [`StoreRecord`]s.
//!
//! Every cell is coerced rather than rejected: unreadable numbers fall back
//! to absent or zero, blank text becomes absent. The only row-level decision
//! is the name gate, rows without a trade name produce no record.
//!
//! [`StoreRecord`]: store_model::StoreRecord

pub mod cleanup;
pub mod fields;
pub mod normalize;
pub mod parse;

pub use cleanup::{PLACEHOLDER_VALUES, clean_placeholders, is_placeholder};
pub use fields::{address_field, code_field, phone_field, text_field};
pub use normalize::{NormalizeReport, ParseIssue, normalize_row, normalize_rows};
pub use parse::{FieldParse, parse_amount, parse_integer};
