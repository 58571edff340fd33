//! Interfaces to external text-generation services.
//!
//! The admin tools ask a generator for blog posts and product descriptions.
//! The store never sees a failure: the helpers below collapse errors into a
//! human-readable message that is stored like any other text.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

pub use gemini::GeminiClient;

/// Why a generation call produced no text
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("API key is not configured")]
    MissingApiKey,

    #[error("Generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Generation API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Generation returned no text")]
    EmptyResponse,
}

/// Trait for text generators
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Human-readable generator name
    fn name(&self) -> &str;

    /// Write a blog post (~300 words) about `topic`
    async fn generate_blog_post(&self, topic: &str) -> Result<String, GenerationError>;

    /// Write a short product description from a name and feature list
    async fn enhance_product_description(
        &self,
        name: &str,
        features: &str,
    ) -> Result<String, GenerationError>;
}

/// Generated blog text, or the message shown in its place on failure
pub async fn blog_post_text(generator: &dyn ContentGenerator, topic: &str) -> String {
    match generator.generate_blog_post(topic).await {
        Ok(text) => text,
        Err(GenerationError::MissingApiKey) => {
            warn!(generator = generator.name(), "API key missing, blog post not generated");
            "Error: API Key missing. Cannot generate content.".to_string()
        }
        Err(GenerationError::EmptyResponse) => "Failed to generate content.".to_string(),
        Err(e) => {
            warn!(generator = generator.name(), error = %e, "blog post generation failed");
            "Error generating content. Please try again.".to_string()
        }
    }
}

/// Generated description, or the message shown in its place on failure
pub async fn product_description_text(
    generator: &dyn ContentGenerator,
    name: &str,
    features: &str,
) -> String {
    match generator.enhance_product_description(name, features).await {
        Ok(text) => text,
        Err(GenerationError::MissingApiKey) => {
            warn!(generator = generator.name(), "API key missing, description not generated");
            "Error: API Key missing.".to_string()
        }
        Err(GenerationError::EmptyResponse) => "Failed to generate description.".to_string(),
        Err(e) => {
            warn!(generator = generator.name(), error = %e, "description generation failed");
            "Error generating description.".to_string()
        }
    }
}
