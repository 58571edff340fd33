//! Gallery detail lookups.
//!
//! Pure functions mapping a gallery category to the product recommended
//! alongside it and to the context image shown next to it.

use crate::domain::Product;

/// Context image for categories without a dedicated one
pub const DEFAULT_CONTEXT_IMAGE: &str = "/sumuheritage.jpeg";

/// Product to recommend next to a gallery image of `category`.
///
/// Picks the first product whose name contains the category's keyword
/// (case-sensitive). When none matches, falls back to a fixed *position* in
/// `products`, not a fixed product: after edits the fallback can land on an
/// unrelated product, or on nothing at all when the list is too short.
pub fn recommended_product<'a>(products: &'a [Product], category: &str) -> Option<&'a Product> {
    let (keyword, fallback) = match category {
        "Student" => ("Scholar", 3),
        "Corporate" => ("Heritage", 2),
        "Lifestyle" | "Artist" => ("Polychrome", 1),
        _ => ("Graphite", 0),
    };

    products
        .iter()
        .find(|p| p.name.contains(keyword))
        .or_else(|| products.get(fallback))
}

/// Image shown beside a gallery image of `category`
pub fn context_image(category: &str) -> &'static str {
    match category {
        "Student" => "/student-context.jpeg",
        "Corporate" => "/corporate-context.jpeg",
        "Lifestyle" | "Artist" => "/artist-context.jpeg",
        _ => DEFAULT_CONTEXT_IMAGE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_keyword_match_is_case_sensitive() {
        let mut products = seed::initial_products();
        products[3].name = "SUMU scholar".to_string();

        // No exact "Scholar" any more, so position 3 wins anyway
        let picked = recommended_product(&products, "Student").unwrap();
        assert_eq!(picked.id.as_str(), "4");

        products.swap(3, 4);
        let picked = recommended_product(&products, "Student").unwrap();
        assert_eq!(picked.name, "SUMU Corporate Custom");
    }

    #[test]
    fn test_artist_is_an_alias_for_lifestyle() {
        let products = seed::initial_products();
        assert_eq!(
            recommended_product(&products, "Artist"),
            recommended_product(&products, "Lifestyle")
        );
        assert_eq!(context_image("Artist"), context_image("Lifestyle"));
    }

    #[test]
    fn test_empty_catalog_recommends_nothing() {
        assert!(recommended_product(&[], "Corporate").is_none());
    }

    #[test]
    fn test_context_images() {
        assert_eq!(context_image("Student"), "/student-context.jpeg");
        assert_eq!(context_image("Corporate"), "/corporate-context.jpeg");
        assert_eq!(context_image("Product"), DEFAULT_CONTEXT_IMAGE);
        assert_eq!(context_image("student"), DEFAULT_CONTEXT_IMAGE);
    }
}
