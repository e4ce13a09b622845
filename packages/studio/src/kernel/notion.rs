//! Notion implementation of `BaseNotesDatabase`.

use anyhow::Result;
use async_trait::async_trait;
use notion_client::{CreatePageRequest, NotionClient};

use super::BaseNotesDatabase;

pub struct NotionDatabase {
    http_client: reqwest::Client,
    base_url: Option<String>,
}

impl NotionDatabase {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self {
            http_client,
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
}

#[async_trait]
impl BaseNotesDatabase for NotionDatabase {
    async fn create_page(&self, token: &str, request: &CreatePageRequest) -> Result<()> {
        let mut client =
            NotionClient::new(token.to_string()).with_http_client(self.http_client.clone());
        if let Some(url) = &self.base_url {
            client = client.with_base_url(url.clone());
        }

        match client.create_page(request).await? {
            Some(page) => tracing::info!(page_id = %page.id, "Record mirrored to Notion"),
            None => tracing::info!("Record mirrored to Notion"),
        }
        Ok(())
    }
}
