//! Gemini client for blog and product copy.
//!
//! Calls the `generateContent` REST endpoint directly. No retries and no
//! timeout beyond what the HTTP client imposes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ContentGenerator, GenerationError};
use crate::config::GeminiSettings;

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST client
pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
    endpoint: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if it has any
    fn text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

impl GeminiClient {
    /// Create a client; without a key every call fails with `MissingApiKey`
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            api_key,
            model: model.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Create from resolved configuration
    pub fn from_settings(settings: &GeminiSettings) -> Self {
        Self::new(settings.api_key.clone(), settings.model.clone())
    }

    /// Point the client at a different base URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn api_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GenerationError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model = %self.model, prompt_len = prompt.len(), "calling Gemini");
        let response = self
            .client
            .post(self.api_url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json().await?;
        body.text().ok_or(GenerationError::EmptyResponse)
    }
}

fn blog_prompt(topic: &str) -> String {
    format!(
        "Write a professional, engaging, and SEO-friendly blog post for a premium stationery brand named \"SUMU Stationery\". \
         The topic is: \"{}\". The tone should be elegant, knowledgeable, and inspiring. \
         Keep it around 300 words. Format with paragraphs.",
        topic
    )
}

fn description_prompt(name: &str, features: &str) -> String {
    format!(
        "Write a compelling, premium product description for a pencil named \"{}\". \
         Key features: {}. Target audience: professionals and artists. Keep it under 50 words.",
        name, features
    )
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate_blog_post(&self, topic: &str) -> Result<String, GenerationError> {
        self.generate(&blog_prompt(topic)).await
    }

    async fn enhance_product_description(
        &self,
        name: &str,
        features: &str,
    ) -> Result<String, GenerationError> {
        self.generate(&description_prompt(name, features)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        let client = GeminiClient::new(None, DEFAULT_MODEL);
        let result = client.generate_blog_post("graphite").await;
        assert!(matches!(result, Err(GenerationError::MissingApiKey)));

        let client = GeminiClient::new(Some("  ".to_string()), DEFAULT_MODEL);
        let result = client.enhance_product_description("Scholar", "grip").await;
        assert!(matches!(result, Err(GenerationError::MissingApiKey)));
    }

    #[test]
    fn test_api_url() {
        let client = GeminiClient::new(None, "gemini-test").with_endpoint("http://localhost:1/v1beta/");
        assert_eq!(
            client.api_url(),
            "http://localhost:1/v1beta/models/gemini-test:generateContent"
        );
    }

    #[test]
    fn test_response_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Graphite "}, {"text": "matters."}]}},
                {"content": {"parts": [{"text": "ignored"}]}}
            ]
        }"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("Graphite matters.".to_string()));

        let empty: GenerateResponse = serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert_eq!(empty.text(), None);
    }

    #[test]
    fn test_prompts_carry_inputs() {
        assert!(blog_prompt("Eco pencils").contains("\"Eco pencils\""));
        let prompt = description_prompt("SUMU Scholar", "ergonomic grip");
        assert!(prompt.contains("\"SUMU Scholar\""));
        assert!(prompt.contains("ergonomic grip"));
    }
}
