//! Upload of store records to the remote import route.
//!
//! A single blocking `POST` carries the whole batch inside an
//! [`ImportEnvelope`](store_model::ImportEnvelope) with full-replace
//! semantics. There is no retry: a timeout or connection fault is returned
//! as an error, and any HTTP status, success or not, comes back as an
//! [`UploadOutcome`] for the operator to read.
//!
//! # Example
//!
//! ```no_run
//! use store_upload::{ImportClient, UploadConfig};
//! use store_model::ImportEnvelope;
//!
//! fn upload() -> store_upload::Result<()> {
//!     let config = UploadConfig::default();
//!     let client = ImportClient::new(&config)?;
//!     let outcome = client.send(&ImportEnvelope::replace_all(Vec::new()))?;
//!     println!("{}", outcome.status);
//!     println!("{}", outcome.body_preview(config.body_preview_chars));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;

pub use client::ImportClient;
pub use config::{DEFAULT_BODY_PREVIEW_CHARS, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS, UploadConfig};
pub use error::{Result, UploadError};
pub use outcome::UploadOutcome;
