//! Product catalog records.

use serde::{Deserialize, Serialize};

use super::{CategoryId, ProductId};

/// A product as stored in `data/products.json`.
///
/// Prices are in the smallest currency unit (whole rupiah for this store),
/// and `discount` is a percentage in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique ID within the product document.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category this product belongs to (not checked against the
    /// category document).
    pub category_id: CategoryId,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    /// Units in stock.
    pub stock: u32,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: u8,
    /// Image path or URL, possibly empty.
    #[serde(default)]
    pub image: String,
    /// Free-form description, possibly empty.
    #[serde(default)]
    pub description: String,
}

/// Input for creating a product. The ID is assigned by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Display name.
    pub name: String,
    /// Category this product belongs to.
    pub category_id: CategoryId,
    /// Unit price in the smallest currency unit.
    pub price: u64,
    /// Units in stock.
    pub stock: u32,
    /// Discount percentage (0-100).
    #[serde(default)]
    pub discount: u8,
    /// Image path or URL.
    #[serde(default)]
    pub image: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl NewProduct {
    /// Attach an ID, producing a full product record.
    #[must_use]
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            category_id: self.category_id,
            price: self.price,
            stock: self.stock,
            discount: self.discount,
            image: self.image,
            description: self.description,
        }
    }
}

/// Input for updating a product.
///
/// All fields are optional - only provided fields will be updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    /// New display name.
    pub name: Option<String>,
    /// New category.
    pub category_id: Option<CategoryId>,
    /// New unit price.
    pub price: Option<u64>,
    /// New stock count.
    pub stock: Option<u32>,
    /// New discount percentage.
    pub discount: Option<u8>,
    /// New image path or URL.
    pub image: Option<String>,
    /// New description.
    pub description: Option<String>,
}

impl ProductPatch {
    /// Shallow-merge the provided fields over an existing record.
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.name {
            product.name = name;
        }
        if let Some(category_id) = self.category_id {
            product.category_id = category_id;
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(discount) = self.discount {
            product.discount = discount;
        }
        if let Some(image) = self.image {
            product.image = image;
        }
        if let Some(description) = self.description {
            product.description = description;
        }
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category_id.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.discount.is_none()
            && self.image.is_none()
            && self.description.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new(1),
            name: "Roti Tawar".to_string(),
            category_id: CategoryId::new(1),
            price: 15_000,
            stock: 20,
            discount: 0,
            image: "images/roti-tawar.jpg".to_string(),
            description: "Roti tawar lembut".to_string(),
        }
    }

    #[test]
    fn test_product_wire_shape_is_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["categoryId"], 1);
        assert!(json.get("category_id").is_none());
    }

    #[test]
    fn test_patch_overlays_only_set_fields() {
        let mut product = sample();
        let patch = ProductPatch {
            price: Some(17_500),
            stock: Some(12),
            ..ProductPatch::default()
        };
        patch.apply(&mut product);
        assert_eq!(product.price, 17_500);
        assert_eq!(product.stock, 12);
        assert_eq!(product.name, "Roti Tawar");
        assert_eq!(product.discount, 0);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut product = sample();
        let before = product.clone();
        let patch = ProductPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut product);
        assert_eq!(product, before);
    }

    #[test]
    fn test_into_product_keeps_fields() {
        let new = NewProduct {
            name: "Roti".to_string(),
            category_id: CategoryId::new(1),
            price: 1000,
            stock: 5,
            ..NewProduct::default()
        };
        let product = new.into_product(ProductId::new(9));
        assert_eq!(product.id, ProductId::new(9));
        assert_eq!(product.name, "Roti");
        assert_eq!(product.price, 1000);
        assert_eq!(product.stock, 5);
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "Croissant",
            "categoryId": 3,
            "price": 12000,
            "stock": 8
        }))
        .unwrap();
        assert_eq!(product.discount, 0);
        assert!(product.image.is_empty());
        assert!(product.description.is_empty());
    }
}
