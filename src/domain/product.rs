//! Catalog products.

use serde::{Deserialize, Serialize};

use super::EntityId;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique among products
    pub id: EntityId,

    /// Display name (e.g. "SUMU Scholar")
    pub name: String,

    /// Free-text category
    pub category: String,

    /// Marketing description
    pub description: String,

    /// Free-text specifications
    pub specifications: String,

    /// Free-text intended use
    pub use_case: String,

    /// Image location (path or URL)
    pub image_url: String,

    /// Display price; empty means "not priced"
    #[serde(default)]
    pub price: String,
}

impl Product {
    /// Whether the product carries a display price
    pub fn is_priced(&self) -> bool {
        !self.price.trim().is_empty()
    }
}

/// Everything needed to create a product; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub description: String,
    pub specifications: String,
    pub use_case: String,
    pub image_url: String,
    #[serde(default)]
    pub price: String,
}

impl NewProduct {
    /// Attach an id, producing the stored entity
    pub fn with_id(self, id: EntityId) -> Product {
        Product {
            id,
            name: self.name,
            category: self.category,
            description: self.description,
            specifications: self.specifications,
            use_case: self.use_case,
            image_url: self.image_url,
            price: self.price,
        }
    }
}
