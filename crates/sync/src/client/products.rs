//! Product CRUD operations.

use breadbox_core::{NewProduct, Product, ProductId, ProductPatch, paths};
use tracing::instrument;

use crate::error::SyncError;

use super::SyncClient;

impl SyncClient {
    /// Get the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the document is malformed.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, SyncError> {
        self.read_sequence(paths::PRODUCTS).await
    }

    /// Add a product, assigning it a fresh ID.
    ///
    /// Reads the whole catalog, appends, and writes it back.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn add_product(&self, new: NewProduct) -> Result<Product, SyncError> {
        let mut products = self.products().await?;
        let product = new.into_product(ProductId::generate());
        products.push(product.clone());
        let message = format!("Add product {}", product.name);
        self.write_sequence(paths::PRODUCTS, &products, &message)
            .await?;
        Ok(product)
    }

    /// Update a product by shallow-merging the patch over the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] (without writing) if no product has
    /// the given ID.
    #[instrument(skip(self, patch), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        patch: ProductPatch,
    ) -> Result<Product, SyncError> {
        let mut products = self.products().await?;
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SyncError::NotFound(format!("product {id}")))?;
        patch.apply(product);
        let updated = product.clone();
        let message = format!("Update product {}", updated.name);
        self.write_sequence(paths::PRODUCTS, &products, &message)
            .await?;
        Ok(updated)
    }

    /// Delete a product by ID.
    ///
    /// Deleting an ID that is not present still rewrites the document and
    /// reports success.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), SyncError> {
        let mut products = self.products().await?;
        products.retain(|p| p.id != id);
        let message = format!("Delete product {id}");
        self.write_sequence(paths::PRODUCTS, &products, &message)
            .await
    }
}
