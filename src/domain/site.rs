//! The site content aggregate.

use serde::{Deserialize, Serialize};

use super::{BlogPost, EntityId, GalleryImage, Product};

/// All site data: three entity collections plus site-wide scalar fields.
///
/// Exactly one instance is live at a time, owned by the content store.
/// Consumers only ever see immutable snapshots of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    /// Insertion order
    pub products: Vec<Product>,

    /// Most recent first
    pub blog_posts: Vec<BlogPost>,

    /// Most recent first
    pub gallery: Vec<GalleryImage>,

    pub hero_headline: String,
    pub hero_subheadline: String,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,

    /// Also applied live as the `--sumu-wood` style token
    pub theme_color: String,
}

impl SiteContent {
    /// Look up a product by id (product detail page)
    pub fn product(&self, id: &EntityId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a blog post by id
    pub fn blog_post(&self, id: &EntityId) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| &p.id == id)
    }

    /// Look up a gallery image by id
    pub fn gallery_image(&self, id: &EntityId) -> Option<&GalleryImage> {
        self.gallery.iter().find(|g| &g.id == id)
    }

    /// The first `limit` products, as teased on the home page
    pub fn featured_products(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }
}
