//! The fixed seed catalog loaded at process start.
//!
//! Every store starts from exactly this data; nothing is persisted, so a
//! restart always returns here.

use chrono::NaiveDate;

use crate::domain::{BlogPost, EntityId, GalleryCategory, GalleryImage, Product, SiteContent};

pub const HERO_HEADLINE: &str = "Defining the Art of Writing.";
pub const HERO_SUBHEADLINE: &str = "Precision. Elegance. Legacy.";
pub const ABOUT_TEXT: &str = "SUMU Stationery carries a legacy of over 25 years. What began as a small retail venture has evolved into a growing stationery brand rooted in quality, trust, and consistency.";
pub const CONTACT_EMAIL: &str = "sumustationery@gmail.com";
pub const CONTACT_PHONE: &str = "+91 9022854954";
pub const THEME_COLOR: &str = "#E3B341";

fn product(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    specifications: &str,
    use_case: &str,
    image_url: &str,
    price: &str,
) -> Product {
    Product {
        id: EntityId::new(id),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        specifications: specifications.to_string(),
        use_case: use_case.to_string(),
        image_url: image_url.to_string(),
        price: price.to_string(),
    }
}

fn image(id: &str, url: &str, caption: &str, category: GalleryCategory) -> GalleryImage {
    GalleryImage {
        id: EntityId::new(id),
        url: url.to_string(),
        caption: caption.to_string(),
        category,
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The five catalog products, in display order
pub fn initial_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "SUMU Graphite 9000",
            "Graphite Pencils",
            "Precision-engineered graphite for architects and artists.",
            "Hexagonal barrel, Cedar wood, HB-8B grades",
            "Technical drawing, sketching, writing",
            "/graphite9000.jpeg",
            "",
        ),
        product(
            "2",
            "SUMU Polychrome",
            "Color Pencils",
            "Richly pigmented cores offering vibrant, blendable colors.",
            "3.8mm lead, oil-based, 72 color range",
            "Artistic rendering, illustrations",
            "/colourpencil.jpeg",
            "",
        ),
        product(
            "3",
            "SUMU Heritage",
            "Premium Wooden Pencils",
            "Our signature series crafted from reclaimed vintage timber.",
            "Matte finish, gold foil stamping, extra-dark lead",
            "Executive writing, gifting",
            "/sumuheritage.jpeg",
            "",
        ),
        product(
            "4",
            "SUMU Scholar",
            "School & Academic",
            "Durable and break-resistant for everyday classroom use.",
            "Bonded lead, ergonomic grip, eco-friendly lacquer",
            "Students, examinations",
            "/sumuscholar.jpeg",
            "",
        ),
        product(
            "5",
            "SUMU Corporate Custom",
            "Corporate & Custom-Branded",
            "Bespoke branding solutions for global enterprises.",
            "Custom Pantone matching, logo engraving",
            "Events, office supplies, brand merchandising",
            "/corporate.jpeg",
            "Contact for Quote",
        ),
    ]
}

/// The two launch blog posts, most recent first as stored
pub fn initial_blog_posts() -> Vec<BlogPost> {
    vec![
        BlogPost {
            id: EntityId::new("1"),
            title: "The Art of Graphite: A 25-Year Journey".to_string(),
            excerpt: "Exploring the evolution of pencil manufacturing from traditional craft to modern precision.".to_string(),
            content: "Pencils are more than just writing instruments; they are tools of creation. At SUMU, we have spent 25 years perfecting the balance between wood and graphite...".to_string(),
            date: date(2023, 10, 15),
            image_url: "crafts.jpeg".to_string(),
        },
        BlogPost {
            id: EntityId::new("2"),
            title: "Sustainable Sourcing in Stationery".to_string(),
            excerpt: "How SUMU ensures every pencil is crafted with respect for the environment.".to_string(),
            content: "Sustainability is at the core of our philosophy. From FSC-certified wood to plastic-free packaging, we ensure that our legacy is one of responsibility...".to_string(),
            date: date(2023, 11, 2),
            image_url: "polychrome.jpeg".to_string(),
        },
    ]
}

/// The six launch gallery images
pub fn initial_gallery() -> Vec<GalleryImage> {
    vec![
        image("1", "/sumuscholar.jpeg", "Student Focus", GalleryCategory::Student),
        image("2", "/sumuheritage.jpeg", "Heritage Texture", GalleryCategory::Product),
        image("3", "/artistpencil.jpeg", "Creative Studio", GalleryCategory::Lifestyle),
        image("4", "/office.jpeg", "Corporate Desk", GalleryCategory::Corporate),
        image("5", "/essential.jpeg", "Everyday Essentials", GalleryCategory::Lifestyle),
        image("6", "/tech.jpeg", "Technical Precision", GalleryCategory::Product),
    ]
}

/// The complete seed aggregate
pub fn initial_content() -> SiteContent {
    SiteContent {
        products: initial_products(),
        blog_posts: initial_blog_posts(),
        gallery: initial_gallery(),
        hero_headline: HERO_HEADLINE.to_string(),
        hero_subheadline: HERO_SUBHEADLINE.to_string(),
        about_text: ABOUT_TEXT.to_string(),
        contact_email: CONTACT_EMAIL.to_string(),
        contact_phone: CONTACT_PHONE.to_string(),
        theme_color: THEME_COLOR.to_string(),
    }
}
