//! Document-level read and write on top of the request primitives.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use breadbox_core::defaults;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::error::SyncError;

use super::{PutRequest, SyncClient};

/// Result of a document write.
#[derive(Debug, Clone)]
pub struct PutOutcome {
    /// Path the document was written to.
    pub path: String,
    /// Content hash of the new document version.
    pub content_sha: Option<String>,
    /// Commit recording the write.
    pub commit_sha: Option<String>,
}

impl SyncClient {
    /// Read a JSON document.
    ///
    /// A 404 for a path with a built-in default yields that default
    /// instead of an error - the only fallback in the system. Any other
    /// failure propagates.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the body is not valid
    /// base64/UTF-8/JSON, or the path is absent and has no default.
    #[instrument(skip(self))]
    pub async fn get_document(&self, path: &str) -> Result<Value, SyncError> {
        match self.get_contents(path).await {
            Ok(file) => decode_document(&file.content),
            Err(e) if e.is_not_found() => match defaults::for_path(path) {
                Some(default) => {
                    debug!(path, "document absent, serving built-in default");
                    Ok(default.clone())
                }
                None => Err(e),
            },
            Err(e) => Err(e),
        }
    }

    /// Create or update a JSON document.
    ///
    /// Reads the existing content hash first: present means a conditional
    /// update, a 404 means a create. Any other failure of the existence
    /// check propagates without attempting the write, so a transient error
    /// can never cause a blind overwrite.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Conflict`] when the hash changed between the
    /// read and the write; callers should re-read and re-apply.
    #[instrument(skip(self, value, message))]
    pub async fn put_document(
        &self,
        path: &str,
        value: &Value,
        message: &str,
    ) -> Result<PutOutcome, SyncError> {
        let content = encode_document(value)?;

        let sha = match self.get_contents(path).await {
            Ok(existing) => Some(existing.sha),
            Err(e) if e.is_not_found() => None,
            Err(e) => return Err(e),
        };

        let response = self
            .put_contents(
                path,
                &PutRequest {
                    message: message.to_string(),
                    content,
                    sha,
                },
            )
            .await?;

        Ok(PutOutcome {
            path: path.to_string(),
            content_sha: response.content.map(|c| c.sha),
            commit_sha: response.commit.map(|c| c.sha),
        })
    }

    /// Read a sequence document into typed records.
    pub(crate) async fn read_sequence<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Vec<T>, SyncError> {
        let value = self.get_document(path).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Write typed records back as a whole sequence document.
    pub(crate) async fn write_sequence<T: Serialize>(
        &self,
        path: &str,
        records: &[T],
        message: &str,
    ) -> Result<(), SyncError> {
        let value = serde_json::to_value(records)?;
        self.put_document(path, &value, message).await?;
        Ok(())
    }
}

/// Decode a base64 document body into JSON.
///
/// The remote wraps base64 at 60 columns; line breaks are stripped before
/// decoding.
fn decode_document(content: &str) -> Result<Value, SyncError> {
    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64.decode(compact)?;
    let text = String::from_utf8(bytes)?;
    Ok(serde_json::from_str(&text)?)
}

/// Encode a JSON document as pretty-printed, base64-wrapped text.
fn encode_document(value: &Value) -> Result<String, SyncError> {
    let text = serde_json::to_string_pretty(value)?;
    Ok(BASE64.encode(text))
}
