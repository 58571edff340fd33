//! Content Store Integration Tests
//!
//! Tests for identity assignment, collection ordering, and the silent no-op
//! behavior of updates and deletes.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;
use sumu::{
    ContentStore, EntityId, GalleryCategory, NewBlogPost, NewGalleryImage, NewProduct, StyleTokens,
};

fn product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
        category: "Pencils".to_string(),
        description: format!("{} description", name),
        ..Default::default()
    }
}

fn post(title: &str) -> NewBlogPost {
    NewBlogPost {
        title: title.to_string(),
        excerpt: "excerpt".to_string(),
        content: "content".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        image_url: "post.jpeg".to_string(),
    }
}

fn image(caption: &str) -> NewGalleryImage {
    NewGalleryImage {
        url: format!("/{}.jpeg", caption),
        caption: caption.to_string(),
        category: GalleryCategory::Student,
    }
}

#[test]
fn test_added_products_have_unique_ids_in_insertion_order() {
    let store = ContentStore::default();

    let names: Vec<String> = (0..20).map(|i| format!("Pencil {}", i)).collect();
    let ids: Vec<EntityId> = names.iter().map(|n| store.add_product(product(n))).collect();

    let content = store.content();
    assert_eq!(content.products.len(), 25);

    let unique: HashSet<_> = content.products.iter().map(|p| &p.id).collect();
    assert_eq!(unique.len(), content.products.len());

    // Seed products first, then the new ones in call order
    let added = &content.products[5..];
    for ((product, name), id) in added.iter().zip(&names).zip(&ids) {
        assert_eq!(&product.name, name);
        assert_eq!(&product.id, id);
    }
}

#[test]
fn test_new_posts_and_images_are_prepended() {
    let store = ContentStore::default();

    let first = store.add_blog_post(post("First"));
    let second = store.add_blog_post(post("Second"));
    let content = store.content();
    assert_eq!(content.blog_posts[0].id, second);
    assert_eq!(content.blog_posts[1].id, first);
    assert_eq!(content.blog_posts.len(), 4);

    let a = store.add_gallery_image(image("a"));
    assert_eq!(store.content().gallery[0].id, a);
    let b = store.add_gallery_image(image("b"));
    let content = store.content();
    assert_eq!(content.gallery[0].id, b);
    assert_eq!(content.gallery[1].id, a);
    assert_eq!(content.gallery.len(), 8);
}

#[test]
fn test_update_with_unknown_id_leaves_products_unchanged() {
    let store = ContentStore::default();
    let before = store.content();

    let mut ghost = before.products[0].clone();
    ghost.id = EntityId::new("does-not-exist");
    ghost.name = "Ghost".to_string();
    store.update_product(ghost);

    let after = store.content();
    assert_eq!(after.products, before.products);
}

#[test]
fn test_update_product_keeps_position() {
    let store = ContentStore::default();
    let mut polychrome = store.content().products[1].clone();
    polychrome.description = "Now with 96 colors.".to_string();

    store.update_product(polychrome);

    let content = store.content();
    assert_eq!(content.products[1].name, "SUMU Polychrome");
    assert_eq!(content.products[1].description, "Now with 96 colors.");
}

#[test]
fn test_delete_is_idempotent() {
    let store = ContentStore::default();
    let id = EntityId::new("3");

    store.delete_product(&id);
    let once = store.content();
    assert_eq!(once.products.len(), 4);
    assert!(once.product(&id).is_none());

    store.delete_product(&id);
    let twice = store.content();
    assert_eq!(twice.products, once.products);
}

#[test]
fn test_delete_posts_and_images() {
    let store = ContentStore::default();

    store.delete_blog_post(&EntityId::new("1"));
    store.delete_gallery_image(&EntityId::new("4"));
    store.delete_gallery_image(&EntityId::new("4"));

    let content = store.content();
    assert_eq!(content.blog_posts.len(), 1);
    assert_eq!(content.blog_posts[0].id.as_str(), "2");
    assert_eq!(content.gallery.len(), 5);
    assert!(content.gallery_image(&EntityId::new("4")).is_none());
}

#[test]
fn test_delete_only_touches_its_collection() {
    let store = ContentStore::default();

    // Product "1" and gallery image "1" share an id string
    store.delete_product(&EntityId::new("1"));

    let content = store.content();
    assert!(content.gallery_image(&EntityId::new("1")).is_some());
    assert!(content.blog_post(&EntityId::new("1")).is_some());
}

#[test]
fn test_update_settings_changes_exactly_four_fields() {
    let store = ContentStore::default();
    let before = store.content();

    store.update_settings("New about", "hello@sumu.in", "+91 1111111111", "#101010");

    let after = store.content();
    assert_eq!(after.about_text, "New about");
    assert_eq!(after.contact_email, "hello@sumu.in");
    assert_eq!(after.contact_phone, "+91 1111111111");
    assert_eq!(after.theme_color, "#101010");

    assert_eq!(after.hero_headline, before.hero_headline);
    assert_eq!(after.hero_subheadline, before.hero_subheadline);
    assert_eq!(after.products, before.products);
    assert_eq!(after.blog_posts, before.blog_posts);
    assert_eq!(after.gallery, before.gallery);
}

#[test]
fn test_update_hero() {
    let store = ContentStore::default();
    store.update_hero("Write boldly.", "Since 1999.");

    let content = store.content();
    assert_eq!(content.hero_headline, "Write boldly.");
    assert_eq!(content.hero_subheadline, "Since 1999.");
    assert_eq!(content.about_text, sumu::seed::ABOUT_TEXT);
}

#[test]
fn test_update_hero_and_settings_is_one_mutation() {
    let tokens = StyleTokens::new();
    let store = ContentStore::seeded(tokens.clone());

    store.update_hero_and_settings("Write boldly.", "Since 1999.", "About", "a@b.co", "123", "#202020");

    let content = store.content();
    assert_eq!(store.version(), 1);
    assert_eq!(content.hero_headline, "Write boldly.");
    assert_eq!(content.hero_subheadline, "Since 1999.");
    assert_eq!(content.about_text, "About");
    assert_eq!(content.contact_email, "a@b.co");
    assert_eq!(content.contact_phone, "123");
    assert_eq!(tokens.theme_color().as_deref(), Some("#202020"));
    assert_eq!(content.products.len(), 5);
}

#[test]
fn test_consecutive_reads_are_equal() {
    let store = ContentStore::default();
    store.add_product(product("Anything"));

    let first = store.content();
    let second = store.content();
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(*first, *second);
}

#[test]
fn test_theme_token_follows_settings() {
    let tokens = StyleTokens::new();
    let store = ContentStore::seeded(tokens.clone());
    assert_eq!(tokens.theme_color().as_deref(), Some("#E3B341"));

    store.update_settings("a", "b@c.de", "1", "#2A2A2A");
    assert_eq!(tokens.theme_color().as_deref(), Some("#2A2A2A"));

    store.update_hero("h", "s");
    assert_eq!(tokens.theme_color().as_deref(), Some("#2A2A2A"));
}

#[test]
fn test_content_serializes_camel_case() {
    let store = ContentStore::default();
    let json = serde_json::to_value(store.content().as_ref()).unwrap();

    assert_eq!(json["heroHeadline"], "Defining the Art of Writing.");
    assert_eq!(json["themeColor"], "#E3B341");
    assert_eq!(json["products"][3]["useCase"], "Students, examinations");
    assert_eq!(json["gallery"][0]["category"], "Student");
    assert_eq!(json["blogPosts"][0]["date"], "2023-10-15");
}
