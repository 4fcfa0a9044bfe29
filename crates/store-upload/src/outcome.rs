//! What came back from the import route.

use store_model::ImportReply;

/// Status and body of the import response, whatever the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// HTTP status code.
    pub status: u16,
    /// Full response body.
    pub body: String,
}

impl UploadOutcome {
    /// Whether the status is 2xx. Informational only.
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The first `max_chars` characters of the body.
    #[must_use]
    pub fn body_preview(&self, max_chars: usize) -> &str {
        match self.body.char_indices().nth(max_chars) {
            Some((end, _)) => &self.body[..end],
            None => &self.body,
        }
    }

    /// Decodes the body as an import reply, if it is one.
    #[must_use]
    pub fn reply(&self) -> Option<ImportReply> {
        serde_json::from_str(&self.body).ok()
    }
}
