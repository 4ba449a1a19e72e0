//! Bulk operations: seeding, export, backup, restore, import, and
//! connection checks.
//!
//! These helpers do no recovery of their own; underlying errors are
//! rewrapped with operation context and re-raised. `test_connection` is
//! the one exception, folding failure into a status value.

use breadbox_core::{ImportPayload, Snapshot, defaults, paths};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{ResultExt as _, SyncError};

use super::SyncClient;

/// One backup snapshot found under `backups/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupEntry {
    /// File name, `backup-<timestamp>.json`.
    pub name: String,
    /// Full path within the repository.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Direct download URL, when the remote provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Result of a connection probe. Never an error.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionStatus {
    /// Whether the repository metadata read succeeded.
    pub success: bool,
    /// Human-readable outcome.
    pub message: String,
}

/// Repository metadata, as reported by the remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoInfo {
    /// Repository name.
    pub name: String,
    /// `owner/name` form.
    pub full_name: String,
    /// Repository description, if set.
    pub description: Option<String>,
    /// Web URL of the repository.
    pub html_url: String,
    /// Default branch the contents endpoint writes to.
    pub default_branch: String,
}

impl SyncClient {
    /// Seed an empty repository with the demo dataset.
    ///
    /// Probes the products document: present means the repository is
    /// already initialized and nothing is written; a 404 seeds all five
    /// documents. Any other probe failure propagates rather than risking
    /// a blind overwrite on a transient error.
    ///
    /// Returns `true` when the seed documents were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the probe fails with anything but a 404, or if
    /// seeding any document fails.
    #[instrument(skip(self))]
    pub async fn initialize(&self) -> Result<bool, SyncError> {
        match self.get_contents(paths::PRODUCTS).await {
            Ok(_) => Ok(false),
            Err(e) if e.is_not_found() => {
                for (path, value) in defaults::seed() {
                    self.put_document(path, value, "Seed default data")
                        .await
                        .context("Initialization failed")?;
                }
                info!("seeded default documents");
                Ok(true)
            }
            Err(e) => Err(e.context("Initialization failed")),
        }
    }

    /// Assemble a snapshot of all five live documents.
    ///
    /// # Errors
    ///
    /// Returns an error (with export context) if any read fails.
    #[instrument(skip(self))]
    pub async fn export_all(&self) -> Result<Snapshot, SyncError> {
        let products = self.products().await.context("Export failed")?;
        let categories = self.categories().await.context("Export failed")?;
        let orders = self.orders().await.context("Export failed")?;
        let contacts = self.contacts().await.context("Export failed")?;
        let website = self.site_settings().await.context("Export failed")?;

        Ok(Snapshot {
            timestamp: Utc::now(),
            products,
            categories,
            orders,
            contacts,
            website,
        })
    }

    /// Write a snapshot under `backups/` and return its path.
    ///
    /// File names embed a UTC timestamp formatted so lexicographic order
    /// matches chronological order.
    ///
    /// # Errors
    ///
    /// Returns an error (with backup context) if the export or the write
    /// fails.
    #[instrument(skip(self))]
    pub async fn backup(&self) -> Result<String, SyncError> {
        let snapshot = self.export_all().await.context("Backup failed")?;
        let path = format!(
            "{}/backup-{}.json",
            paths::BACKUP_DIR,
            snapshot.timestamp.format("%Y-%m-%dT%H-%M-%S%.3fZ")
        );
        let value = serde_json::to_value(&snapshot)?;
        self.put_document(&path, &value, "Create backup")
            .await
            .context("Backup failed")?;
        info!(%path, "backup written");
        Ok(path)
    }

    /// Restore the live documents from a snapshot stored in the
    /// repository.
    ///
    /// # Errors
    ///
    /// Returns an error (with restore context) if the snapshot cannot be
    /// read or any write fails.
    #[instrument(skip(self))]
    pub async fn restore(&self, path: &str) -> Result<(), SyncError> {
        let value = self.get_document(path).await.context("Restore failed")?;
        let payload: ImportPayload =
            serde_json::from_value(value).map_err(|e| SyncError::Parse(e).context("Restore failed"))?;
        self.import_all(payload).await.context("Restore failed")
    }

    /// Overwrite the live documents from a caller-supplied payload.
    ///
    /// `products` and `categories` are mandatory; the other sections are
    /// written only when present.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Validation`] when a mandatory section is
    /// missing, or an import-context error if any write fails.
    #[instrument(skip(self, payload))]
    pub async fn import_all(&self, payload: ImportPayload) -> Result<(), SyncError> {
        let missing = payload.missing_sections();
        if !missing.is_empty() {
            return Err(SyncError::Validation(format!(
                "import payload is missing required sections: {}",
                missing.join(", ")
            )));
        }

        if let Some(products) = payload.products {
            self.write_sequence(paths::PRODUCTS, &products, "Import products")
                .await
                .context("Import failed")?;
        }
        if let Some(categories) = payload.categories {
            self.write_sequence(paths::CATEGORIES, &categories, "Import categories")
                .await
                .context("Import failed")?;
        }
        if let Some(orders) = payload.orders {
            self.write_sequence(paths::ORDERS, &orders, "Import orders")
                .await
                .context("Import failed")?;
        }
        if let Some(contacts) = payload.contacts {
            self.write_sequence(paths::CONTACTS, &contacts, "Import contacts")
                .await
                .context("Import failed")?;
        }
        if let Some(website) = payload.website {
            let value = serde_json::to_value(&website)?;
            self.put_document(paths::WEBSITE, &value, "Import site settings")
                .await
                .context("Import failed")?;
        }
        info!("import complete");
        Ok(())
    }

    /// List backup snapshots, newest first.
    ///
    /// A repository that has never been backed up has no `backups/` path;
    /// that 404 yields an empty list rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory listing fails for any other
    /// reason.
    #[instrument(skip(self))]
    pub async fn list_backups(&self) -> Result<Vec<BackupEntry>, SyncError> {
        let entries = match self.get_dir(paths::BACKUP_DIR).await {
            Ok(entries) => entries,
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut backups: Vec<BackupEntry> = entries
            .into_iter()
            .filter(|entry| entry.name.ends_with(".json"))
            .map(|entry| BackupEntry {
                name: entry.name,
                path: entry.path,
                size: entry.size,
                download_url: entry.download_url,
            })
            .collect();
        // Names embed a zero-padded timestamp, so descending name order is
        // newest-first.
        backups.sort_by(|a, b| b.name.cmp(&a.name));
        Ok(backups)
    }

    /// Probe the connection and report the outcome without erroring.
    #[instrument(skip(self))]
    pub async fn test_connection(&self) -> ConnectionStatus {
        match self.repo_metadata().await {
            Ok(metadata) => ConnectionStatus {
                success: true,
                message: format!("Connected to {}", metadata.full_name),
            },
            Err(e) => ConnectionStatus {
                success: false,
                message: e.to_string(),
            },
        }
    }

    /// Read repository metadata.
    ///
    /// # Errors
    ///
    /// Returns an error (with repository-info context) if the metadata
    /// read fails.
    #[instrument(skip(self))]
    pub async fn repo_info(&self) -> Result<RepoInfo, SyncError> {
        let metadata = self
            .repo_metadata()
            .await
            .context("Failed to fetch repository info")?;
        Ok(RepoInfo {
            name: metadata.name,
            full_name: metadata.full_name,
            description: metadata.description,
            html_url: metadata.html_url,
            default_branch: metadata.default_branch,
        })
    }
}
