//! Extraction strategies, tried in order by the `Extractor`.
//!
//! Each strategy fetches what it needs through the kernel's page fetcher and
//! reports a candidate (title and/or raw text), nothing, or an error. What an
//! error means for the overall extraction is the strategy's own call via
//! [`FailurePolicy`].

use async_trait::async_trait;
use scraper::Html;
use serde::Deserialize;
use tracing::debug;

use super::html::{description_text, first_heading, fragment_text};
use super::models::{ExtractionCandidate, ExtractionTarget};
use crate::error::ExtractError;
use crate::kernel::BasePageFetcher;

/// How the extractor treats an error from a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Log and move on to the next strategy
    FallThrough,
    /// Stop extracting and return the error
    Abort,
}

#[async_trait]
pub trait ExtractionStrategy: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &'static str;

    fn failure_policy(&self) -> FailurePolicy;

    async fn attempt(
        &self,
        fetcher: &dyn BasePageFetcher,
        target: &ExtractionTarget,
    ) -> Result<Option<ExtractionCandidate>, ExtractError>;
}

// =============================================================================
// Structured data (`{url}.json`)
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    #[serde(default)]
    product: Option<ProductJson>,
}

#[derive(Debug, Deserialize)]
struct ProductJson {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body_html: Option<String>,
}

/// Reads `title` and `body_html` from the storefront's product JSON.
pub struct StructuredDataStrategy;

impl StructuredDataStrategy {
    /// Candidate from a product JSON body. Non-JSON bodies are errors.
    pub fn parse(body: &str) -> Result<ExtractionCandidate, ExtractError> {
        let envelope: ProductEnvelope =
            serde_json::from_str(body).map_err(|e| ExtractError::Decode(e.to_string()))?;

        let Some(product) = envelope.product else {
            return Ok(ExtractionCandidate::default());
        };

        Ok(ExtractionCandidate {
            title: product.title.filter(|t| !t.trim().is_empty()),
            text: product
                .body_html
                .as_deref()
                .map(fragment_text)
                .unwrap_or_default(),
        })
    }
}

#[async_trait]
impl ExtractionStrategy for StructuredDataStrategy {
    fn name(&self) -> &'static str {
        "structured_data"
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::FallThrough
    }

    async fn attempt(
        &self,
        fetcher: &dyn BasePageFetcher,
        target: &ExtractionTarget,
    ) -> Result<Option<ExtractionCandidate>, ExtractError> {
        let url = target.structured_data_url();
        let page = fetcher
            .fetch(&url)
            .await
            .map_err(|e| ExtractError::Fetch(e.to_string()))?;

        if !page.is_ok() {
            debug!(url = %url, status = page.status, "No structured data");
            return Ok(None);
        }

        Self::parse(&page.body).map(Some)
    }
}

// =============================================================================
// HTML page
// =============================================================================

/// Scrapes the product page itself: first `<h1>` and the description container.
pub struct HtmlPageStrategy;

impl HtmlPageStrategy {
    /// Candidate from a full HTML document.
    pub fn parse(html: &str) -> ExtractionCandidate {
        let document = Html::parse_document(html);
        ExtractionCandidate {
            title: first_heading(&document),
            text: description_text(&document).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl ExtractionStrategy for HtmlPageStrategy {
    fn name(&self) -> &'static str {
        "html_page"
    }

    fn failure_policy(&self) -> FailurePolicy {
        FailurePolicy::Abort
    }

    async fn attempt(
        &self,
        fetcher: &dyn BasePageFetcher,
        target: &ExtractionTarget,
    ) -> Result<Option<ExtractionCandidate>, ExtractError> {
        // Status is not checked: error pages still parse, and an empty parse
        // ends in the no-text sentinel.
        let page = fetcher
            .fetch(&target.original)
            .await
            .map_err(|e| ExtractError::Fetch(e.to_string()))?;

        Ok(Some(Self::parse(&page.body)))
    }
}
