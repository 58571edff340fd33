//! sumu - content store for the SUMU Stationery website
//!
//! Holds every piece of editable site content (products, blog posts, gallery
//! images, hero/about/contact text, theme color) in one in-memory aggregate
//! and keeps every page that displays it in sync.
//!
//! # Architecture
//!
//! The system is built around a single store:
//! - The store owns the content; nothing else mutates it
//! - Every mutation publishes a new immutable snapshot to subscribers,
//!   synchronously and in order
//! - The theme color is mirrored into a live style token before subscribers
//!   see the change
//!
//! # Modules
//!
//! - `domain`: Data structures (Product, BlogPost, GalleryImage, SiteContent)
//! - `seed`: The initial catalog
//! - `core`: ContentStore, propagation, theme token
//! - `lookup`: Gallery recommendations
//! - `admin`: Credential-gated editing on top of the store
//! - `adapters`: External text generation (Gemini)
//! - `contact`: Contact form validation and WhatsApp links
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Browse the seeded content
//! sumu products
//! sumu gallery
//!
//! # Edit (prints the resulting content)
//! sumu admin -u editor -p secret generate-post "Choosing the right lead grade"
//! ```

pub mod adapters;
pub mod admin;
pub mod cli;
pub mod config;
pub mod contact;
pub mod core;
pub mod domain;
pub mod lookup;
pub mod seed;

// Re-export main types at crate root for convenience
pub use crate::core::{ContentStore, StyleTokens, Subscription, ThemeSink, THEME_TOKEN};
pub use domain::{
    BlogPost, EntityId, GalleryCategory, GalleryImage, NewBlogPost, NewGalleryImage, NewProduct,
    Product, SiteContent,
};
pub use lookup::{context_image, recommended_product};
