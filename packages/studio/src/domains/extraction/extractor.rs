use std::sync::Arc;
use tracing::{debug, info, warn};

use super::filter::filter_description;
use super::models::{ExtractionTarget, ProductPage, DEFAULT_TITLE, NO_TEXT_SENTINEL};
use super::strategies::{ExtractionStrategy, FailurePolicy, HtmlPageStrategy, StructuredDataStrategy};
use crate::error::ExtractError;
use crate::kernel::BasePageFetcher;

/// Runs extraction strategies in order and cleans the winning text.
pub struct Extractor {
    fetcher: Arc<dyn BasePageFetcher>,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Extractor {
    /// Structured data first, HTML page second.
    pub fn new(fetcher: Arc<dyn BasePageFetcher>) -> Self {
        Self::with_strategies(
            fetcher,
            vec![Box::new(StructuredDataStrategy), Box::new(HtmlPageStrategy)],
        )
    }

    pub fn with_strategies(
        fetcher: Arc<dyn BasePageFetcher>,
        strategies: Vec<Box<dyn ExtractionStrategy>>,
    ) -> Self {
        Self { fetcher, strategies }
    }

    /// Title and cleaned description for a product URL.
    ///
    /// Each strategy's title, when it finds one, replaces the current title.
    /// The first strategy with non-empty text ends the search. If nothing
    /// survives filtering the description is [`NO_TEXT_SENTINEL`].
    pub async fn extract(&self, url: &str) -> Result<ProductPage, ExtractError> {
        let target = ExtractionTarget::new(url);
        if target.original.is_empty() {
            return Err(ExtractError::EmptyUrl);
        }

        let mut title = DEFAULT_TITLE.to_string();
        let mut raw_text = String::new();

        for strategy in &self.strategies {
            match strategy.attempt(self.fetcher.as_ref(), &target).await {
                Ok(Some(candidate)) => {
                    if let Some(found) = candidate.title.clone() {
                        title = found;
                    }
                    if candidate.has_text() {
                        debug!(
                            strategy = strategy.name(),
                            chars = candidate.text.len(),
                            "Strategy produced description"
                        );
                        raw_text = candidate.text;
                        break;
                    }
                    debug!(strategy = strategy.name(), "Strategy found no description");
                }
                Ok(None) => {
                    debug!(strategy = strategy.name(), "Strategy not applicable");
                }
                Err(e) => match strategy.failure_policy() {
                    FailurePolicy::FallThrough => {
                        debug!(strategy = strategy.name(), error = %e, "Strategy failed, trying next");
                    }
                    FailurePolicy::Abort => {
                        warn!(strategy = strategy.name(), url = %target.original, error = %e, "Extraction failed");
                        return Err(e);
                    }
                },
            }
        }

        let mut description = filter_description(&raw_text);
        if description.is_empty() {
            description = NO_TEXT_SENTINEL.to_string();
        }

        info!(
            url = %target.original,
            title = %title,
            lines = description.lines().count(),
            "Product extracted"
        );

        Ok(ProductPage {
            url: target.original,
            title,
            description,
        })
    }
}
