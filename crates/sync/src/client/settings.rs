//! Site settings operations.

use breadbox_core::{SiteSettings, paths};
use tracing::instrument;

use crate::error::SyncError;

use super::SyncClient;

impl SyncClient {
    /// Get the site settings singleton.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the document is malformed.
    #[instrument(skip(self))]
    pub async fn site_settings(&self) -> Result<SiteSettings, SyncError> {
        let value = self.get_document(paths::WEBSITE).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Replace the site settings wholesale (no merge).
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    #[instrument(skip(self, settings))]
    pub async fn update_site_settings(&self, settings: &SiteSettings) -> Result<(), SyncError> {
        let value = serde_json::to_value(settings)?;
        self.put_document(paths::WEBSITE, &value, "Update site settings")
            .await?;
        Ok(())
    }
}
