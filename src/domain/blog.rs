//! Blog posts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::EntityId;

/// A published blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: EntityId,
    pub title: String,

    /// Short summary shown in listings
    pub excerpt: String,

    /// Full body
    pub content: String,

    /// Publication date, serialized as YYYY-MM-DD
    pub date: NaiveDate,

    pub image_url: String,
}

/// Everything needed to create a blog post; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: NaiveDate,
    pub image_url: String,
}

impl NewBlogPost {
    /// Attach an id, producing the stored entity
    pub fn with_id(self, id: EntityId) -> BlogPost {
        BlogPost {
            id,
            title: self.title,
            excerpt: self.excerpt,
            content: self.content,
            date: self.date,
            image_url: self.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_is_iso() {
        let post = NewBlogPost {
            title: "T".to_string(),
            excerpt: "E".to_string(),
            content: "C".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 15).unwrap(),
            image_url: "crafts.jpeg".to_string(),
        }
        .with_id(EntityId::new("1"));

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["date"], "2023-10-15");
        assert_eq!(json["imageUrl"], "crafts.jpeg");
    }
}
