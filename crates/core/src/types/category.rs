//! Product category records.

use serde::{Deserialize, Serialize};

use super::CategoryId;

/// A category as stored in `data/categories.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique ID within the category document.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
}

/// Input for creating a category. The ID is assigned by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl NewCategory {
    /// Attach an ID, producing a full category record.
    #[must_use]
    pub fn into_category(self, id: CategoryId) -> Category {
        Category {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

/// Input for updating a category.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPatch {
    /// New display name.
    pub name: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl CategoryPatch {
    /// Shallow-merge the provided fields over an existing record.
    pub fn apply(self, category: &mut Category) {
        if let Some(name) = self.name {
            category.name = name;
        }
        if let Some(description) = self.description {
            category.description = description;
        }
    }
}
