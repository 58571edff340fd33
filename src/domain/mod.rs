//! Domain types for the SUMU site content.
//!
//! This module contains the core data structures:
//! - Product, BlogPost, GalleryImage: the three entity collections
//! - SiteContent: the aggregate holding every collection and scalar field
//! - New*: creation inputs, which carry everything except the id

pub mod blog;
pub mod gallery;
pub mod id;
pub mod product;
pub mod site;

// Re-export commonly used types
pub use blog::{BlogPost, NewBlogPost};
pub use gallery::{GalleryCategory, GalleryImage, NewGalleryImage};
pub use id::EntityId;
pub use product::{NewProduct, Product};
pub use site::SiteContent;
