//! Order CRUD operations.

use breadbox_core::{NewOrder, Order, OrderId, OrderPatch, paths};
use tracing::instrument;

use crate::error::SyncError;

use super::SyncClient;

impl SyncClient {
    /// Get the full order log.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the document is malformed.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, SyncError> {
        self.read_sequence(paths::ORDERS).await
    }

    /// Record a new order, assigning it a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self, new))]
    pub async fn add_order(&self, new: NewOrder) -> Result<Order, SyncError> {
        let mut orders = self.orders().await?;
        let order = new.into_order(OrderId::generate());
        orders.push(order.clone());
        let message = format!("Add order {}", order.id);
        self.write_sequence(paths::ORDERS, &orders, &message).await?;
        Ok(order)
    }

    /// Update an order, typically to advance its status.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] (without writing) if no order has
    /// the given ID.
    #[instrument(skip(self, patch), fields(order_id = %id))]
    pub async fn update_order(&self, id: OrderId, patch: OrderPatch) -> Result<Order, SyncError> {
        let mut orders = self.orders().await?;
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| SyncError::NotFound(format!("order {id}")))?;
        patch.apply(order);
        let updated = order.clone();
        let message = format!("Update order {id}");
        self.write_sequence(paths::ORDERS, &orders, &message).await?;
        Ok(updated)
    }

    /// Delete an order by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn delete_order(&self, id: OrderId) -> Result<(), SyncError> {
        let mut orders = self.orders().await?;
        orders.retain(|o| o.id != id);
        let message = format!("Delete order {id}");
        self.write_sequence(paths::ORDERS, &orders, &message).await
    }
}
