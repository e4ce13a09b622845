// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Caption prompts, line filtering and publish bookkeeping live in domains/.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BasePageFetcher)

use anyhow::Result;
use async_trait::async_trait;
use notion_client::CreatePageRequest;

// =============================================================================
// Page Fetcher Trait (Infrastructure - raw HTTP GET)
// =============================================================================

/// Response of a single GET, body decoded as text.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL that was requested
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[async_trait]
pub trait BasePageFetcher: Send + Sync {
    /// GET a URL. Transport failures are errors; any HTTP status is a response.
    async fn fetch(&self, url: &str) -> Result<FetchedPage>;
}

// =============================================================================
// AI Trait (Infrastructure - Generic LLM capabilities)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Complete a prompt with an LLM (returns raw text response).
    ///
    /// The key travels with the call so a missing key is reported by the
    /// action that needed it rather than at startup.
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String>;
}

// =============================================================================
// Notes Database Trait (Infrastructure - record creation)
// =============================================================================

#[async_trait]
pub trait BaseNotesDatabase: Send + Sync {
    /// Create one page. Provider rejections come back as
    /// `notion_client::NotionError` inside the `anyhow::Error`.
    async fn create_page(&self, token: &str, request: &CreatePageRequest) -> Result<()>;
}
