//! Pure Gemini REST API client
//!
//! A minimal client for Google's Generative Language API with no
//! domain-specific logic. Supports single-turn text generation.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::GeminiClient;
//!
//! let client = GeminiClient::from_env()?;
//!
//! let text = client
//!     .generate_text("gemini-flash-latest", "Write a haiku about rust")
//!     .await?;
//! ```

pub mod error;
pub mod types;

pub use error::{GeminiError, Result};
pub use types::*;

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Pure Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http_client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from environment variable `GEMINI_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::Config("GEMINI_API_KEY not set".into()))?;
        Ok(Self::new(api_key))
    }

    /// Set a custom base URL (for proxies, tests, etc.).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Reuse an existing HTTP client (shares its connection pool and timeout).
    pub fn with_http_client(mut self, client: Client) -> Self {
        self.http_client = client;
        self
    }

    /// Build a dedicated HTTP client with a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GeminiError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Get the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint for `generateContent` on the given model.
    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }

    /// Generate content.
    ///
    /// Sends the request to `models/{model}:generateContent` and returns the
    /// first candidate's text.
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateResponse> {
        if self.api_key.trim().is_empty() {
            return Err(GeminiError::Config("API key is empty".into()));
        }

        let start = std::time::Instant::now();

        let response = self
            .http_client
            .post(self.generate_url(model))
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Gemini request failed");
                GeminiError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Gemini API error");

            // Prefer the structured message when the body is the usual error envelope
            let message = serde_json::from_str::<ErrorEnvelope>(&error_text)
                .map(|env| match env.error.status {
                    Some(code) => format!("{}: {}", code, env.error.message),
                    None => env.error.message,
                })
                .unwrap_or(error_text);

            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let raw: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        let text = raw
            .text()
            .ok_or_else(|| GeminiError::Empty(raw.block_reason()))?;

        debug!(
            model = %model,
            duration_ms = start.elapsed().as_millis(),
            response_chars = text.len(),
            "Gemini generate content"
        );

        Ok(GenerateResponse {
            text,
            usage: raw.usage_metadata,
        })
    }

    /// Single-prompt convenience wrapper around [`generate_content`](Self::generate_content).
    pub async fn generate_text(&self, model: &str, prompt: impl Into<String>) -> Result<String> {
        let request = GenerateContentRequest::from_prompt(prompt);
        self.generate_content(model, &request)
            .await
            .map(|r| r.text)
    }
}
