//! Admin tooling on top of the content store.
//!
//! An [`AdminSession`] is only obtainable through a [`CredentialCheck`]. It
//! validates form drafts, fills in the same defaults the admin panel uses,
//! and then calls the store's mutation operations.

pub mod credentials;
pub mod forms;

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::{self, ContentGenerator};
use crate::core::ContentStore;
use crate::domain::{EntityId, NewBlogPost, NewGalleryImage, Product};

pub use credentials::{CredentialCheck, StaticCredentials};
pub use forms::{GalleryDraft, ProductDraft, SettingsForm};

/// Image used for products created without one
pub const PLACEHOLDER_PRODUCT_IMAGE: &str = "https://picsum.photos/600/600";

/// Image used for generated blog posts
pub const PLACEHOLDER_POST_IMAGE: &str = "https://picsum.photos/800/400";

/// Price shown for products created without one
pub const DEFAULT_PRICE: &str = "Contact for Quote";

/// Features passed to the generator when a product has no specifications
pub const DEFAULT_FEATURES: &str = "standard pencil";

const EXCERPT_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminError {
    #[error("Invalid credentials. Please try again.")]
    InvalidCredentials,

    #[error("{0}")]
    MissingField(&'static str),
}

/// An authenticated editing session
#[derive(Debug)]
pub struct AdminSession {
    store: ContentStore,
    username: String,
}

impl AdminSession {
    /// Open a session if `check` accepts the credentials
    pub fn login(
        check: &dyn CredentialCheck,
        store: ContentStore,
        username: &str,
        password: &str,
    ) -> Result<Self, AdminError> {
        if !check.verify(username, password) {
            warn!(username = username.trim(), "admin login rejected");
            return Err(AdminError::InvalidCredentials);
        }

        info!(username = username.trim(), "admin login");
        Ok(Self {
            store,
            username: username.trim().to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Create a product from a draft; name and category are required
    pub fn create_product(&self, draft: ProductDraft) -> Result<EntityId, AdminError> {
        let product = draft.into_new_product()?;
        Ok(self.store.add_product(product))
    }

    /// Save edits to an existing product; name and category are required
    pub fn save_product(&self, product: Product) -> Result<(), AdminError> {
        forms::require_name_and_category(&product.name, &product.category)?;
        self.store.update_product(product);
        Ok(())
    }

    pub fn delete_product(&self, id: &EntityId) {
        self.store.delete_product(id);
    }

    /// Add a gallery image from a draft; the URL is required
    pub fn add_gallery_image(&self, draft: GalleryDraft) -> Result<EntityId, AdminError> {
        let image: NewGalleryImage = draft.into_new_image()?;
        Ok(self.store.add_gallery_image(image))
    }

    pub fn delete_gallery_image(&self, id: &EntityId) {
        self.store.delete_gallery_image(id);
    }

    pub fn delete_blog_post(&self, id: &EntityId) {
        self.store.delete_blog_post(id);
    }

    /// Generate a post about `topic` and publish it at the top of the blog.
    ///
    /// A generator failure still publishes: the post body is the error text.
    pub async fn publish_generated_post(
        &self,
        generator: &dyn ContentGenerator,
        topic: &str,
    ) -> Result<EntityId, AdminError> {
        if topic.is_empty() {
            return Err(AdminError::MissingField("Please enter a topic."));
        }

        let text = adapters::blog_post_text(generator, topic).await;
        let post = generated_post(topic, text, Local::now().date_naive());
        Ok(self.store.add_blog_post(post))
    }

    /// Ask the generator for a product description.
    ///
    /// The caller decides where to put the text (a draft or an edited product).
    pub async fn enhance_description(
        &self,
        generator: &dyn ContentGenerator,
        name: &str,
        specifications: &str,
    ) -> Result<String, AdminError> {
        if name.is_empty() {
            return Err(AdminError::MissingField("Enter product name first"));
        }

        let features = if specifications.is_empty() {
            DEFAULT_FEATURES
        } else {
            specifications
        };
        Ok(adapters::product_description_text(generator, name, features).await)
    }

    /// Save hero text and site settings as one change
    pub fn save_settings(&self, form: SettingsForm) {
        self.store.update_hero_and_settings(
            form.hero_headline,
            form.hero_subheadline,
            form.about_text,
            form.contact_email,
            form.contact_phone,
            form.theme_color,
        );
    }
}

/// Blog post built from generated text
fn generated_post(topic: &str, content: String, date: NaiveDate) -> NewBlogPost {
    let excerpt = format!("{}...", content.chars().take(EXCERPT_CHARS).collect::<String>());
    NewBlogPost {
        title: topic.to_string(),
        excerpt,
        content,
        date,
        image_url: PLACEHOLDER_POST_IMAGE.to_string(),
    }
}
