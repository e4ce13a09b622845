//! Gemini implementation of `BaseAI`.

use anyhow::Result;
use async_trait::async_trait;
use gemini_client::GeminiClient;

use super::BaseAI;

pub struct GeminiAI {
    http_client: reqwest::Client,
    model: String,
    base_url: Option<String>,
}

impl GeminiAI {
    pub fn new(http_client: reqwest::Client, model: impl Into<String>) -> Self {
        Self {
            http_client,
            model: model.into(),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn client(&self, api_key: &str) -> GeminiClient {
        let client = GeminiClient::new(api_key).with_http_client(self.http_client.clone());
        match &self.base_url {
            Some(url) => client.with_base_url(url.clone()),
            None => client,
        }
    }
}

#[async_trait]
impl BaseAI for GeminiAI {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        let text = self.client(api_key).generate_text(&self.model, prompt).await?;
        Ok(text)
    }
}
