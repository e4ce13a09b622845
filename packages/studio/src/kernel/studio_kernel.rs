// StudioKernel - infrastructure the operator actions run against
//
// Holds the three outbound dependencies behind traits so tests can swap in
// the mocks from test_dependencies.

use anyhow::{Context, Result};
use std::sync::Arc;

use super::{BaseAI, BaseNotesDatabase, BasePageFetcher, GeminiAI, HttpPageFetcher, NotionDatabase};
use crate::config::Config;

pub struct StudioKernel {
    pub fetcher: Arc<dyn BasePageFetcher>,
    pub ai: Arc<dyn BaseAI>,
    pub notes: Arc<dyn BaseNotesDatabase>,
}

impl StudioKernel {
    pub fn new(
        fetcher: Arc<dyn BasePageFetcher>,
        ai: Arc<dyn BaseAI>,
        notes: Arc<dyn BaseNotesDatabase>,
    ) -> Self {
        Self { fetcher, ai, notes }
    }

    /// Production wiring: reqwest fetcher, Gemini, Notion. Every client
    /// carries the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config.http_timeout)?;

        let api_client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()
            .context("Failed to create API client")?;

        Ok(Self::new(
            Arc::new(fetcher),
            Arc::new(GeminiAI::new(api_client.clone(), config.gemini_model.clone())),
            Arc::new(NotionDatabase::new(api_client)),
        ))
    }
}
