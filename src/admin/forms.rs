//! Admin form drafts and their validation.

use serde::{Deserialize, Serialize};

use super::{AdminError, DEFAULT_PRICE, PLACEHOLDER_PRODUCT_IMAGE};
use crate::domain::{GalleryCategory, NewGalleryImage, NewProduct, SiteContent};

pub(crate) fn require_name_and_category(name: &str, category: &str) -> Result<(), AdminError> {
    if name.is_empty() || category.is_empty() {
        return Err(AdminError::MissingField("Name and Category required"));
    }
    Ok(())
}

/// Product form as filled in; empty strings mean "not provided"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub specifications: String,
    pub use_case: String,
    pub image_url: String,
    pub price: String,
}

impl ProductDraft {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    /// Validate and apply defaults for the image and price
    pub fn into_new_product(self) -> Result<NewProduct, AdminError> {
        require_name_and_category(&self.name, &self.category)?;

        Ok(NewProduct {
            name: self.name,
            category: self.category,
            description: self.description,
            specifications: self.specifications,
            use_case: self.use_case,
            image_url: or_default(self.image_url, PLACEHOLDER_PRODUCT_IMAGE),
            price: or_default(self.price, DEFAULT_PRICE),
        })
    }
}

/// Gallery form as filled in
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryDraft {
    pub url: String,
    pub caption: String,
    pub category: GalleryCategory,
}

impl GalleryDraft {
    pub fn new(url: impl Into<String>, category: GalleryCategory) -> Self {
        Self {
            url: url.into(),
            category,
            ..Default::default()
        }
    }

    pub fn into_new_image(self) -> Result<NewGalleryImage, AdminError> {
        if self.url.is_empty() {
            return Err(AdminError::MissingField("Image URL required"));
        }

        Ok(NewGalleryImage {
            url: self.url,
            caption: self.caption,
            category: self.category,
        })
    }
}

/// Hero text plus site settings, edited together
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsForm {
    pub hero_headline: String,
    pub hero_subheadline: String,
    pub about_text: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub theme_color: String,
}

impl SettingsForm {
    /// Pre-fill from the current content
    pub fn from_content(content: &SiteContent) -> Self {
        Self {
            hero_headline: content.hero_headline.clone(),
            hero_subheadline: content.hero_subheadline.clone(),
            about_text: content.about_text.clone(),
            contact_email: content.contact_email.clone(),
            contact_phone: content.contact_phone.clone(),
            theme_color: content.theme_color.clone(),
        }
    }
}

fn or_default(value: String, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_product_defaults() {
        let product = ProductDraft::new("SUMU Sketch", "Graphite Pencils")
            .into_new_product()
            .unwrap();

        assert_eq!(product.image_url, PLACEHOLDER_PRODUCT_IMAGE);
        assert_eq!(product.price, DEFAULT_PRICE);
        assert_eq!(product.description, "");
    }

    #[test]
    fn test_product_keeps_provided_values() {
        let draft = ProductDraft {
            image_url: "/sketch.jpeg".to_string(),
            price: "₹120".to_string(),
            ..ProductDraft::new("SUMU Sketch", "Graphite Pencils")
        };
        let product = draft.into_new_product().unwrap();
        assert_eq!(product.image_url, "/sketch.jpeg");
        assert_eq!(product.price, "₹120");
    }

    #[test]
    fn test_product_requires_name_and_category() {
        let err = ProductDraft::new("", "Pencils").into_new_product().unwrap_err();
        assert_eq!(err, AdminError::MissingField("Name and Category required"));
        assert!(ProductDraft::new("Name", "").into_new_product().is_err());
    }

    #[test]
    fn test_gallery_draft() {
        let draft = GalleryDraft::default();
        assert_eq!(draft.category, GalleryCategory::Lifestyle);
        assert_eq!(
            draft.into_new_image().unwrap_err(),
            AdminError::MissingField("Image URL required")
        );

        let image = GalleryDraft::new("/desk.jpeg", GalleryCategory::Corporate)
            .into_new_image()
            .unwrap();
        assert_eq!(image.caption, "");
        assert_eq!(image.category, GalleryCategory::Corporate);
    }

    #[test]
    fn test_settings_prefill() {
        let form = SettingsForm::from_content(&seed::initial_content());
        assert_eq!(form.hero_headline, seed::HERO_HEADLINE);
        assert_eq!(form.theme_color, seed::THEME_COLOR);
    }
}
