//! Point-in-time bundles of all live documents, used for backup, restore,
//! export and import.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Contact, Order, Product, SiteSettings};

/// A complete snapshot of the five live documents plus a timestamp.
///
/// Written to `backups/backup-<timestamp>.json` by backup operations and
/// returned by exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// When the snapshot was assembled.
    pub timestamp: DateTime<Utc>,
    /// Product catalog at snapshot time.
    pub products: Vec<Product>,
    /// Category list at snapshot time.
    pub categories: Vec<Category>,
    /// Order log at snapshot time.
    pub orders: Vec<Order>,
    /// Contact submissions at snapshot time.
    pub contacts: Vec<Contact>,
    /// Site settings at snapshot time.
    pub website: SiteSettings,
}

/// A caller-supplied import payload.
///
/// `products` and `categories` are mandatory for an import to be accepted;
/// the remaining sections are written only when present. A [`Snapshot`]
/// converts losslessly into a payload, so export-then-import round-trips.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportPayload {
    /// Snapshot timestamp, informational only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    /// Product catalog to restore. Required.
    #[serde(default)]
    pub products: Option<Vec<Product>>,
    /// Category list to restore. Required.
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
    /// Order log to restore, if present.
    #[serde(default)]
    pub orders: Option<Vec<Order>>,
    /// Contact submissions to restore, if present.
    #[serde(default)]
    pub contacts: Option<Vec<Contact>>,
    /// Site settings to restore, if present.
    #[serde(default)]
    pub website: Option<SiteSettings>,
}

impl ImportPayload {
    /// Names of mandatory sections missing from this payload.
    #[must_use]
    pub fn missing_sections(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.products.is_none() {
            missing.push("products");
        }
        if self.categories.is_none() {
            missing.push("categories");
        }
        missing
    }
}

impl From<Snapshot> for ImportPayload {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            timestamp: Some(snapshot.timestamp),
            products: Some(snapshot.products),
            categories: Some(snapshot.categories),
            orders: Some(snapshot.orders),
            contacts: Some(snapshot.contacts),
            website: Some(snapshot.website),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryId, ProductId};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            timestamp: Utc::now(),
            products: vec![Product {
                id: ProductId::new(1),
                name: "Roti Tawar".to_string(),
                category_id: CategoryId::new(1),
                price: 15_000,
                stock: 20,
                discount: 0,
                image: String::new(),
                description: String::new(),
            }],
            categories: vec![Category {
                id: CategoryId::new(1),
                name: "Roti".to_string(),
                description: String::new(),
            }],
            orders: vec![],
            contacts: vec![],
            website: SiteSettings::default(),
        }
    }

    #[test]
    fn test_snapshot_converts_to_complete_payload() {
        let payload = ImportPayload::from(sample_snapshot());
        assert!(payload.missing_sections().is_empty());
        assert!(payload.orders.is_some());
        assert!(payload.website.is_some());
    }

    #[test]
    fn test_missing_sections_reported() {
        let payload: ImportPayload =
            serde_json::from_value(serde_json::json!({"orders": []})).unwrap();
        assert_eq!(payload.missing_sections(), vec!["products", "categories"]);
    }

    #[test]
    fn test_payload_without_optional_sections_is_valid() {
        let payload: ImportPayload = serde_json::from_value(serde_json::json!({
            "products": [],
            "categories": []
        }))
        .unwrap();
        assert!(payload.missing_sections().is_empty());
        assert!(payload.orders.is_none());
        assert!(payload.contacts.is_none());
        assert!(payload.website.is_none());
    }

    #[test]
    fn test_snapshot_roundtrip_preserves_documents() {
        let snapshot = sample_snapshot();
        let json = serde_json::to_string_pretty(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
