use tracing::{info, warn};

use super::Session;
use crate::auth::verify_password;
use crate::config::Config;
use crate::domains::captions::{Campaign, CaptionGenerator};
use crate::domains::extraction::Extractor;
use crate::domains::publishing::{ExportSummary, PublishResult, RecordPublisher};
use crate::error::SessionError;
use crate::kernel::StudioKernel;

/// Operator actions. Stateless apart from configuration and the kernel;
/// every action takes the session it works on.
///
/// Actions run one at a time and await their network calls in sequence.
/// Nothing is retried; the operator re-triggers an action to try again.
pub struct Studio {
    config: Config,
    extractor: Extractor,
    generator: CaptionGenerator,
    publisher: RecordPublisher,
}

impl Studio {
    pub fn new(config: Config, kernel: StudioKernel) -> Self {
        Self {
            config,
            extractor: Extractor::new(kernel.fetcher),
            generator: CaptionGenerator::new(kernel.ai),
            publisher: RecordPublisher::new(kernel.notes),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn unlock(&self, session: &mut Session, password: &str) -> Result<(), SessionError> {
        verify_password(self.config.access_password.as_deref(), password)?;
        session.set_authenticated();
        info!("Session unlocked");
        Ok(())
    }

    /// Extract the product, generate captions, and make them the session's campaign.
    ///
    /// The generation counter is bumped before extracting, so a failed
    /// extraction still invalidates edits to the previous campaign while
    /// leaving that campaign in place.
    pub async fn generate<'s>(
        &self,
        session: &'s mut Session,
        url: &str,
    ) -> Result<&'s Campaign, SessionError> {
        session.require_authenticated()?;
        let api_key = self
            .config
            .gemini_api_key
            .as_deref()
            .ok_or(SessionError::MissingApiKey)?;
        if url.trim().is_empty() {
            return Err(SessionError::MissingUrl);
        }

        let generation = session.begin_generation();
        info!(url = %url.trim(), generation, "Generating campaign");

        let product = self.extractor.extract(url).await?;
        let campaign = self
            .generator
            .generate(&product.title, &product.description, api_key)
            .await;

        session.set_campaign(product, campaign);
        session.require_campaign()
    }

    /// Publish one record with its current (possibly edited) post.
    pub async fn save(&self, session: &Session, index: usize) -> Result<PublishResult, SessionError> {
        session.require_authenticated()?;
        let campaign = session.require_campaign()?;
        let record = campaign
            .get(index)
            .ok_or(SessionError::NoSuchRecord { index })?;
        let post = session.current_post(index).unwrap_or_default();

        Ok(self
            .publisher
            .publish(
                session.product_name(),
                post,
                record.display_persona(),
                self.config.notion_token.as_deref(),
                self.config.notion_database_id.as_deref(),
            )
            .await)
    }

    /// Publish every record in order, one call at a time.
    ///
    /// Records with an empty persona or post are skipped. A failed record does
    /// not stop the export. `on_progress(done, total)` runs after each record.
    pub async fn export<F>(
        &self,
        session: &Session,
        mut on_progress: F,
    ) -> Result<ExportSummary, SessionError>
    where
        F: FnMut(usize, usize),
    {
        session.require_authenticated()?;
        if self.config.notion_token.is_none() {
            return Err(SessionError::MissingNotionConfig);
        }
        let campaign = session.require_campaign()?;

        let mut summary = ExportSummary {
            total: campaign.len(),
            ..Default::default()
        };

        for (index, record) in campaign.iter().enumerate() {
            let post = session.current_post(index).unwrap_or_default();

            if record.persona.is_empty() || post.is_empty() {
                summary.skipped += 1;
            } else {
                summary.attempted += 1;
                let result = self
                    .publisher
                    .publish(
                        session.product_name(),
                        post,
                        &record.persona,
                        self.config.notion_token.as_deref(),
                        self.config.notion_database_id.as_deref(),
                    )
                    .await;

                if result.success {
                    summary.succeeded += 1;
                } else {
                    summary.failures.push((index, result.message));
                }
            }

            on_progress(index + 1, summary.total);
        }

        if summary.failed() > 0 {
            warn!(
                succeeded = summary.succeeded,
                failed = summary.failed(),
                "Export finished with failures"
            );
        } else {
            info!(succeeded = summary.succeeded, skipped = summary.skipped, "Export finished");
        }

        Ok(summary)
    }

    pub fn reset(&self, session: &mut Session) {
        session.reset();
        info!("Session reset");
    }
}
