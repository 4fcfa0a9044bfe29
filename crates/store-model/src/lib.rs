//! Data model for the store import tool.
//!
//! [`StoreRecord`] is the normalized per-vendor unit written to
//! `stores_import.json`; [`ImportEnvelope`] is the request body sent to the
//! remote import route and [`ImportReply`] is what that route answers.

pub mod envelope;
pub mod record;

pub use envelope::{ImportEnvelope, ImportReply};
pub use record::{STATUS_ACTIVE, StoreRecord};
