use std::sync::Arc;
use tracing::{info, warn};

use super::models::Campaign;
use super::prompt::{build_prompt, parse_campaign};
use crate::error::CaptionError;
use crate::kernel::BaseAI;

/// Sends product text to the model and parses the captions it returns.
pub struct CaptionGenerator {
    ai: Arc<dyn BaseAI>,
}

impl CaptionGenerator {
    pub fn new(ai: Arc<dyn BaseAI>) -> Self {
        Self { ai }
    }

    /// Campaign for a product, or an error describing why there is none.
    pub async fn try_generate(
        &self,
        product_name: &str,
        description: &str,
        api_key: &str,
    ) -> Result<Campaign, CaptionError> {
        if api_key.trim().is_empty() {
            return Err(CaptionError::MissingApiKey);
        }

        let prompt = build_prompt(product_name, description);
        let reply = self
            .ai
            .complete(api_key, &prompt)
            .await
            .map_err(|e| CaptionError::Provider(e.to_string()))?;

        let campaign = parse_campaign(&reply)?;
        info!(product = %product_name, captions = campaign.len(), "Campaign generated");
        Ok(campaign)
    }

    /// Like [`try_generate`](Self::try_generate), but a failure comes back as a
    /// one-record campaign with persona `Error` so it renders inline.
    pub async fn generate(&self, product_name: &str, description: &str, api_key: &str) -> Campaign {
        match self.try_generate(product_name, description, api_key).await {
            Ok(campaign) => campaign,
            Err(e) => {
                warn!(product = %product_name, error = %e, "Caption generation failed");
                Campaign::from_error(e)
            }
        }
    }
}
