//! Wire types exchanged with the remote import route.

use serde::{Deserialize, Serialize};

use crate::record::StoreRecord;

/// Request body for a batch import.
///
/// The whole collection is one transfer unit. `delete_existing` asks the
/// remote side to discard its current stores before inserting these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportEnvelope {
    pub stores: Vec<StoreRecord>,
    pub delete_existing: bool,
}

impl ImportEnvelope {
    /// Build a full-replace envelope. Empty batches are valid.
    #[must_use]
    pub fn replace_all(stores: Vec<StoreRecord>) -> Self {
        Self {
            stores,
            delete_existing: true,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}

/// Reply from the import route.
///
/// Success replies carry the counters; failures carry only `error`. The
/// client never relies on this shape to decide the outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReply {
    #[serde(default)]
    pub success: bool,
    pub deleted_count: Option<u64>,
    pub inserted_count: Option<u64>,
    pub skipped_count: Option<u64>,
    pub total_input: Option<u64>,
    /// First few per-store failures reported by the server.
    #[serde(default)]
    pub errors: Vec<String>,
    pub error: Option<String>,
}
