use async_trait::async_trait;
use reqwest::Client;

use crate::error::{Result, TravelBuddyError};
use crate::models::{GeminiRequest, GeminiResponse};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Thin seam over the hosted generation API so handlers and tests can
/// substitute their own implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    /// Single attempt per request: no retry, no backoff, no internal timeout.
    /// A failure here terminates the whole request.
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{GEMINI_API_URL}/{}:generateContent", self.model);
        let request = GeminiRequest::from_prompt(prompt);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                TravelBuddyError::Upstream(format!("Failed to send request to Gemini API: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TravelBuddyError::Upstream(format!(
                "Gemini API error {status}: {body}"
            )));
        }

        let parsed: GeminiResponse = response.json().await.map_err(|e| {
            TravelBuddyError::Upstream(format!("Failed to parse Gemini API response: {e}"))
        })?;

        parsed
            .text()
            .ok_or_else(|| TravelBuddyError::Upstream("Gemini API returned no candidates".to_string()))
    }
}
