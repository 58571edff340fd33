//! Gallery images and their categories.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::EntityId;

/// Closed set of gallery categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GalleryCategory {
    Student,
    Corporate,
    Product,
    Lifestyle,
}

impl GalleryCategory {
    pub const ALL: [GalleryCategory; 4] = [
        GalleryCategory::Student,
        GalleryCategory::Corporate,
        GalleryCategory::Product,
        GalleryCategory::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GalleryCategory::Student => "Student",
            GalleryCategory::Corporate => "Corporate",
            GalleryCategory::Product => "Product",
            GalleryCategory::Lifestyle => "Lifestyle",
        }
    }
}

impl Default for GalleryCategory {
    fn default() -> Self {
        Self::Lifestyle
    }
}

impl std::fmt::Display for GalleryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown gallery category: {0}")]
pub struct UnknownCategory(pub String);

impl std::str::FromStr for GalleryCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GalleryCategory::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// An image shown in the gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: EntityId,
    pub url: String,
    pub caption: String,
    pub category: GalleryCategory,
}

/// Everything needed to add a gallery image; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub url: String,
    pub caption: String,
    pub category: GalleryCategory,
}

impl NewGalleryImage {
    /// Attach an id, producing the stored entity
    pub fn with_id(self, id: EntityId) -> GalleryImage {
        GalleryImage {
            id,
            url: self.url,
            caption: self.caption,
            category: self.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("Student".parse::<GalleryCategory>().unwrap(), GalleryCategory::Student);
        assert_eq!("lifestyle".parse::<GalleryCategory>().unwrap(), GalleryCategory::Lifestyle);
        assert!("Artist".parse::<GalleryCategory>().is_err());
    }

    #[test]
    fn test_every_category_parses_from_its_name() {
        for category in GalleryCategory::ALL {
            assert_eq!(category.as_str().parse::<GalleryCategory>().unwrap(), category);
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_category_serializes_by_name() {
        let json = serde_json::to_string(&GalleryCategory::Corporate).unwrap();
        assert_eq!(json, "\"Corporate\"");
    }
}
