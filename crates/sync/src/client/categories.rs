//! Category CRUD operations.

use breadbox_core::{Category, CategoryId, CategoryPatch, NewCategory, paths};
use tracing::instrument;

use crate::error::SyncError;

use super::SyncClient;

impl SyncClient {
    /// Get all categories.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the document is malformed.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Vec<Category>, SyncError> {
        self.read_sequence(paths::CATEGORIES).await
    }

    /// Add a category, assigning it a fresh ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn add_category(&self, new: NewCategory) -> Result<Category, SyncError> {
        let mut categories = self.categories().await?;
        let category = new.into_category(CategoryId::generate());
        categories.push(category.clone());
        let message = format!("Add category {}", category.name);
        self.write_sequence(paths::CATEGORIES, &categories, &message)
            .await?;
        Ok(category)
    }

    /// Update a category by shallow-merging the patch over the stored
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotFound`] (without writing) if no category
    /// has the given ID.
    #[instrument(skip(self, patch), fields(category_id = %id))]
    pub async fn update_category(
        &self,
        id: CategoryId,
        patch: CategoryPatch,
    ) -> Result<Category, SyncError> {
        let mut categories = self.categories().await?;
        let category = categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| SyncError::NotFound(format!("category {id}")))?;
        patch.apply(category);
        let updated = category.clone();
        let message = format!("Update category {}", updated.name);
        self.write_sequence(paths::CATEGORIES, &categories, &message)
            .await?;
        Ok(updated)
    }

    /// Delete a category by ID.
    ///
    /// Products referencing the category are left untouched; referential
    /// integrity across documents is not enforced.
    ///
    /// # Errors
    ///
    /// Returns an error if the read or write fails.
    #[instrument(skip(self), fields(category_id = %id))]
    pub async fn delete_category(&self, id: CategoryId) -> Result<(), SyncError> {
        let mut categories = self.categories().await?;
        categories.retain(|c| c.id != id);
        let message = format!("Delete category {id}");
        self.write_sequence(paths::CATEGORIES, &categories, &message)
            .await
    }
}
