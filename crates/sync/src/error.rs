//! Unified error handling for the sync client.

use thiserror::Error;

/// Errors that can occur when synchronizing documents with the remote
/// repository.
///
/// Nothing here is retried internally; errors bubble to the caller. The
/// two deliberate exceptions are the 404-to-default fallback on document
/// reads and [`SyncClient::test_connection`], which folds failure into a
/// status value.
///
/// [`SyncClient::test_connection`]: crate::SyncClient::test_connection
#[derive(Debug, Error)]
pub enum SyncError {
    /// Transport-level failure (connection refused, DNS, invalid body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote returned a non-success status.
    #[error("Remote error ({status}): {message}")]
    Remote {
        /// HTTP status code.
        status: u16,
        /// Server-supplied message, falling back to the status text.
        message: String,
    },

    /// A conditional write was rejected because the content hash changed
    /// between the read and the write. Retryable: re-read and re-apply.
    #[error("Write conflict on {path}: {message}")]
    Conflict {
        /// Document path that conflicted.
        path: String,
        /// Server-supplied conflict message.
        message: String,
    },

    /// JSON (de)serialization failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A document body was not valid base64.
    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),

    /// A decoded document body was not valid UTF-8.
    #[error("Invalid UTF-8 in document body: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// An update targeted a record that is not in the sequence.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A bulk import payload failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A lower-level error rewrapped with operation context by the bulk
    /// helpers (backup, restore, import, export, repo info).
    #[error("{context}: {source}")]
    Context {
        /// What the client was doing when the error occurred.
        context: String,
        /// The underlying error.
        #[source]
        source: Box<SyncError>,
    },
}

impl SyncError {
    /// True when the error is a remote 404 for a path that does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Remote { status: 404, .. })
    }

    /// True when the error is a rejected conditional write.
    #[must_use]
    pub const fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }

    /// Rewrap this error with operation context.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for attaching operation context to results.
pub(crate) trait ResultExt<T> {
    /// Rewrap the error side with operation context.
    fn context(self, context: &str) -> Result<T, SyncError>;
}

impl<T> ResultExt<T> for Result<T, SyncError> {
    fn context(self, context: &str) -> Result<T, SyncError> {
        self.map_err(|e| e.context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_display() {
        let err = SyncError::Remote {
            status: 401,
            message: "Bad credentials".to_string(),
        };
        assert_eq!(err.to_string(), "Remote error (401): Bad credentials");
    }

    #[test]
    fn test_is_not_found_only_matches_remote_404() {
        let err = SyncError::Remote {
            status: 404,
            message: "Not Found".to_string(),
        };
        assert!(err.is_not_found());

        let err = SyncError::Remote {
            status: 500,
            message: "boom".to_string(),
        };
        assert!(!err.is_not_found());

        assert!(!SyncError::NotFound("product 1".to_string()).is_not_found());
    }

    #[test]
    fn test_context_wraps_and_displays() {
        let inner = SyncError::Remote {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        let err = inner.context("Backup failed");
        assert_eq!(err.to_string(), "Backup failed: Remote error (502): Bad Gateway");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_conflict_is_distinct_from_remote() {
        let err = SyncError::Conflict {
            path: "data/products.json".to_string(),
            message: "sha mismatch".to_string(),
        };
        assert!(err.is_conflict());
        assert!(!err.is_not_found());
    }
}
