//! The content store: single owner of the site content.
//!
//! All changes go through the mutation operations below. None of them fail:
//! callers validate input first (see [`crate::admin`]). Unknown ids on
//! update or delete are silent no-ops.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use tracing::{debug, info};

use super::propagation::{Propagation, Subscription};
use super::theme::{StyleTokens, ThemeSink, THEME_TOKEN};
use crate::domain::{
    EntityId, NewBlogPost, NewGalleryImage, NewProduct, Product, SiteContent,
};
use crate::seed;

pub(crate) struct StoreInner {
    /// Current snapshot; replaced copy-on-write by each mutation
    content: RefCell<Arc<SiteContent>>,

    /// Number of mutations applied since creation
    version: Cell<u64>,

    theme: RefCell<Box<dyn ThemeSink>>,

    /// Last color written to the theme token
    applied_theme: RefCell<String>,

    pub(crate) propagation: Propagation,
}

impl StoreInner {
    pub(crate) fn snapshot(&self) -> Arc<SiteContent> {
        Arc::clone(&self.content.borrow())
    }
}

/// Handle to the content store.
///
/// Cloning is cheap and every clone refers to the same store; hand one to
/// each consumer when it is constructed. The store is single-threaded.
#[derive(Clone)]
pub struct ContentStore {
    inner: Rc<StoreInner>,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::seeded(StyleTokens::new())
    }
}

impl ContentStore {
    /// Create a store holding `initial`, writing theme changes to `theme`.
    ///
    /// The initial theme color is applied immediately.
    pub fn new(initial: SiteContent, theme: impl ThemeSink + 'static) -> Self {
        let mut theme: Box<dyn ThemeSink> = Box::new(theme);
        theme.set_token(THEME_TOKEN, &initial.theme_color);

        Self {
            inner: Rc::new(StoreInner {
                applied_theme: RefCell::new(initial.theme_color.clone()),
                content: RefCell::new(Arc::new(initial)),
                version: Cell::new(0),
                theme: RefCell::new(theme),
                propagation: Propagation::default(),
            }),
        }
    }

    /// Create a store from the seed catalog
    pub fn seeded(theme: impl ThemeSink + 'static) -> Self {
        Self::new(seed::initial_content(), theme)
    }

    /// Current snapshot.
    ///
    /// Repeated calls without an intervening mutation return the same `Arc`.
    pub fn content(&self) -> Arc<SiteContent> {
        self.inner.snapshot()
    }

    /// Number of mutations applied so far
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Register a listener.
    ///
    /// The listener receives the current snapshot right away, then one
    /// snapshot per mutation, in order, until the returned [`Subscription`]
    /// is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(&Arc<SiteContent>) + 'static,
    {
        let version = self.version();
        let content = self.content();
        let id = self
            .inner
            .propagation
            .register(version, &content, Box::new(listener));
        Subscription::new(id, Rc::downgrade(&self.inner))
    }

    /// Number of attached listeners
    pub fn subscriber_count(&self) -> usize {
        self.inner.propagation.listener_count()
    }

    /// Append a product, assigning it a fresh id
    pub fn add_product(&self, product: NewProduct) -> EntityId {
        let id = EntityId::generate();
        let product = product.with_id(id.clone());
        self.mutate("add_product", |content| content.products.push(product));
        id
    }

    /// Replace the product with the same id; no-op if there is none
    pub fn update_product(&self, product: Product) {
        self.mutate("update_product", |content| {
            match content.products.iter_mut().find(|p| p.id == product.id) {
                Some(existing) => *existing = product,
                None => debug!(id = %product.id, "update_product: no such product"),
            }
        });
    }

    /// Remove the product with this id; no-op if absent
    pub fn delete_product(&self, id: &EntityId) {
        self.mutate("delete_product", |content| {
            content.products.retain(|p| &p.id != id);
        });
    }

    /// Prepend a blog post, assigning it a fresh id
    pub fn add_blog_post(&self, post: NewBlogPost) -> EntityId {
        let id = EntityId::generate();
        let post = post.with_id(id.clone());
        self.mutate("add_blog_post", |content| content.blog_posts.insert(0, post));
        id
    }

    /// Remove the blog post with this id; no-op if absent
    pub fn delete_blog_post(&self, id: &EntityId) {
        self.mutate("delete_blog_post", |content| {
            content.blog_posts.retain(|p| &p.id != id);
        });
    }

    /// Prepend a gallery image, assigning it a fresh id
    pub fn add_gallery_image(&self, image: NewGalleryImage) -> EntityId {
        let id = EntityId::generate();
        let image = image.with_id(id.clone());
        self.mutate("add_gallery_image", |content| content.gallery.insert(0, image));
        id
    }

    /// Remove the gallery image with this id; no-op if absent
    pub fn delete_gallery_image(&self, id: &EntityId) {
        self.mutate("delete_gallery_image", |content| {
            content.gallery.retain(|g| &g.id != id);
        });
    }

    pub fn update_hero(&self, headline: impl Into<String>, subheadline: impl Into<String>) {
        let headline = headline.into();
        let subheadline = subheadline.into();
        self.mutate("update_hero", |content| {
            content.hero_headline = headline;
            content.hero_subheadline = subheadline;
        });
    }

    /// Replace about text, contact details and theme color together
    pub fn update_settings(
        &self,
        about_text: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        theme_color: impl Into<String>,
    ) {
        let about_text = about_text.into();
        let email = email.into();
        let phone = phone.into();
        let theme_color = theme_color.into();
        self.mutate("update_settings", |content| {
            content.about_text = about_text;
            content.contact_email = email;
            content.contact_phone = phone;
            content.theme_color = theme_color;
        });
    }

    /// Replace hero text and site settings in a single round.
    ///
    /// Subscribers never see the new hero next to the old settings.
    pub fn update_hero_and_settings(
        &self,
        headline: impl Into<String>,
        subheadline: impl Into<String>,
        about_text: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        theme_color: impl Into<String>,
    ) {
        let headline = headline.into();
        let subheadline = subheadline.into();
        let about_text = about_text.into();
        let email = email.into();
        let phone = phone.into();
        let theme_color = theme_color.into();
        self.mutate("update_hero_and_settings", |content| {
            content.hero_headline = headline;
            content.hero_subheadline = subheadline;
            content.about_text = about_text;
            content.contact_email = email;
            content.contact_phone = phone;
            content.theme_color = theme_color;
        });
    }

    /// Apply `change` to the aggregate, sync the theme token, then publish.
    fn mutate<R>(&self, operation: &'static str, change: impl FnOnce(&mut SiteContent) -> R) -> R {
        let (result, version, snapshot) = {
            let mut current = self.inner.content.borrow_mut();
            let result = change(Arc::make_mut(&mut current));

            let version = self.inner.version.get() + 1;
            self.inner.version.set(version);
            (result, version, Arc::clone(&current))
        };
        debug!(operation, version, "content updated");

        self.sync_theme(&snapshot.theme_color);
        self.inner.propagation.publish(version, snapshot);
        result
    }

    fn sync_theme(&self, color: &str) {
        let mut applied = self.inner.applied_theme.borrow_mut();
        if *applied == color {
            return;
        }
        self.inner.theme.borrow_mut().set_token(THEME_TOKEN, color);
        info!(from = %applied, to = %color, "theme color changed");
        *applied = color.to_string();
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("version", &self.version())
            .field("subscribers", &self.subscriber_count())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pencil(name: &str) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            category: "Pencils".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_initial_theme_applied() {
        let tokens = StyleTokens::new();
        let _store = ContentStore::seeded(tokens.clone());
        assert_eq!(tokens.theme_color(), Some(seed::THEME_COLOR.to_string()));
    }

    #[test]
    fn test_version_counts_every_mutation() {
        let store = ContentStore::default();
        assert_eq!(store.version(), 0);

        store.add_product(pencil("A"));
        store.delete_product(&EntityId::new("missing"));
        assert_eq!(store.version(), 2);
    }

    #[test]
    fn test_snapshots_are_copy_on_write() {
        let store = ContentStore::default();
        let before = store.content();

        store.add_product(pencil("A"));
        let after = store.content();

        assert_eq!(before.products.len(), 5);
        assert_eq!(after.products.len(), 6);
    }

    #[test]
    fn test_reads_without_mutation_share_snapshot() {
        let store = ContentStore::default();
        let a = store.content();
        let b = store.content();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_update_product_replaces_in_place() {
        let store = ContentStore::default();
        let mut heritage = store.content().products[2].clone();
        heritage.price = "₹450".to_string();

        store.update_product(heritage.clone());

        let content = store.content();
        assert_eq!(content.products[2], heritage);
        assert_eq!(content.products.len(), 5);
    }

    #[test]
    fn test_theme_written_only_on_change() {
        let tokens = StyleTokens::new();
        let store = ContentStore::seeded(tokens.clone());

        store.update_settings("about", "a@b.co", "123", seed::THEME_COLOR);
        assert_eq!(tokens.theme_color(), Some(seed::THEME_COLOR.to_string()));

        store.update_settings("about", "a@b.co", "123", "#112233");
        assert_eq!(tokens.theme_color(), Some("#112233".to_string()));
    }
}
