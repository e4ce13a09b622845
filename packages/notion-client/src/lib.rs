//! Pure Notion REST API client.
//!
//! A minimal client for the Notion public API. Supports creating pages
//! inside a database.
//!
//! # Example
//!
//! ```rust,ignore
//! use notion_client::{CreatePageRequest, NotionClient, PropertyValue};
//!
//! let client = NotionClient::new("secret_...".into());
//!
//! let request = CreatePageRequest::in_database("a1b2c3")
//!     .property("Name", PropertyValue::title("Hello"));
//! if let Some(page) = client.create_page(&request).await? {
//!     println!("created {}", page.id);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{NotionError, Result};
pub use types::{CreatePageRequest, Page, Parent, PropertyValue, RichText, StatusOption, TextContent};

use reqwest::StatusCode;
use std::time::Duration;

const BASE_URL: &str = "https://api.notion.com/v1";

/// Schema version sent with every request.
pub const NOTION_VERSION: &str = "2022-06-28";

/// Notion caps a single rich-text content block at this many characters.
pub const MAX_TEXT_CONTENT_CHARS: usize = 2000;

pub struct NotionClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl NotionClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Reuse an existing HTTP client (shares its connection pool and timeout).
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Build a dedicated HTTP client with a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self> {
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotionError::Config(e.to_string()))?;
        Ok(self)
    }

    /// Point at a different API root (tests, proxies).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a page. Only HTTP 200 counts as success.
    ///
    /// Once Notion answers 200 the page exists, so an unreadable body still
    /// succeeds and yields `None`.
    pub async fn create_page(&self, request: &CreatePageRequest) -> Result<Option<Page>> {
        if self.token.trim().is_empty() {
            return Err(NotionError::Config("token is empty".into()));
        }
        if request.parent.database_id.is_empty() {
            return Err(NotionError::Config("database id is empty".into()));
        }

        let url = format!("{}/pages", self.base_url.trim_end_matches('/'));
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(request)
            .send()
            .await
            .map_err(|e| NotionError::Network(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Notion rejected page");
            return Err(NotionError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page = match resp.text().await {
            Ok(body) => serde_json::from_str::<Page>(&body)
                .map_err(|e| tracing::debug!(error = %e, "Unrecognised page body"))
                .ok(),
            Err(e) => {
                tracing::debug!(error = %e, "Failed to read page body");
                None
            }
        };
        match &page {
            Some(page) => tracing::debug!(page_id = %page.id, "Notion page created"),
            None => tracing::debug!("Notion page created"),
        }

        Ok(page)
    }
}

/// Truncate to at most `max` characters (not bytes).
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
