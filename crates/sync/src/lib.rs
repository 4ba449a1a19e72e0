//! Breadbox Sync - GitHub-backed synchronization client.
//!
//! Persists and retrieves the bakery site's JSON documents (products,
//! categories, orders, contacts, site settings) in a GitHub repository via
//! the repository-contents endpoint. Every operation is a short chain of
//! sequential requests: fetch a document, decode, mutate, re-encode,
//! upload.
//!
//! # Consistency model
//!
//! Writes are conditional on the content hash (`sha`) read immediately
//! beforehand; the remote rejects a stale hash, which surfaces as
//! [`SyncError::Conflict`] so callers can re-read and retry. The
//! read-then-write window is still racy across independent clients, and
//! this library makes no attempt to serialize them.
//!
//! # Example
//!
//! ```rust,ignore
//! use breadbox_core::NewProduct;
//! use breadbox_sync::{SyncClient, SyncConfig};
//!
//! let config = SyncConfig::from_env()?;
//! let client = SyncClient::new(&config)?;
//!
//! let product = client.add_product(NewProduct {
//!     name: "Roti Sobek".into(),
//!     category_id: 1.into(),
//!     price: 18_000,
//!     stock: 12,
//!     ..NewProduct::default()
//! }).await?;
//!
//! let path = client.backup().await?;
//! tracing::info!(%path, "backup written");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

mod client;
pub mod config;
pub mod error;

pub use client::{
    BackupEntry, ConnectionStatus, PutOutcome, RepoInfo, SyncClient,
};
pub use config::{ConfigError, SyncConfig};
pub use error::SyncError;
