//! Order records.
//!
//! Orders are produced by the storefront and carry fields this library does
//! not model (customer details, line items, totals). Only `id` and `status`
//! are interpreted here; everything else is preserved verbatim through
//! read-modify-write cycles via a flattened map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::OrderId;

/// An order as stored in `data/orders.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Unique ID within the order document.
    pub id: OrderId,
    /// Order status (e.g. "pending", "paid", "shipped").
    pub status: String,
    /// Externally defined fields, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Input for recording a new order. The ID is assigned by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    /// Initial status; storefronts submit "pending".
    pub status: String,
    /// Externally defined fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NewOrder {
    /// Attach an ID, producing a full order record.
    #[must_use]
    pub fn into_order(self, id: OrderId) -> Order {
        Order {
            id,
            status: self.status,
            extra: self.extra,
        }
    }
}

/// Input for updating an order.
///
/// `status` replaces the stored status; `extra` keys are shallow-merged
/// over the stored extra fields, key by key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPatch {
    /// New status.
    pub status: Option<String>,
    /// Extra fields to overlay.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OrderPatch {
    /// Shallow-merge the provided fields over an existing record.
    pub fn apply(self, order: &mut Order) {
        if let Some(status) = self.status {
            order.status = status;
        }
        for (key, value) in self.extra {
            order.extra.insert(key, value);
        }
    }
}
