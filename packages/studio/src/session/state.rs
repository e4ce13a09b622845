use std::collections::HashMap;

use crate::domains::captions::Campaign;
use crate::domains::extraction::ProductPage;
use crate::error::SessionError;

/// Everything one operator session holds between actions.
///
/// Edits are keyed by (record index, generation). Each Generate bumps the
/// generation, so editor text typed against an older campaign never leaks
/// into a newer one.
#[derive(Debug, Default)]
pub struct Session {
    authenticated: bool,
    product: Option<ProductPage>,
    campaign: Option<Campaign>,
    generation: u64,
    edits: HashMap<(usize, u64), String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub(crate) fn set_authenticated(&mut self) {
        self.authenticated = true;
    }

    pub(crate) fn require_authenticated(&self) -> Result<(), SessionError> {
        if self.authenticated {
            Ok(())
        } else {
            Err(SessionError::Locked)
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new generation and forget edits from earlier ones
    pub(crate) fn begin_generation(&mut self) -> u64 {
        self.generation += 1;
        let current = self.generation;
        self.edits.retain(|(_, generation), _| *generation == current);
        current
    }

    pub(crate) fn set_campaign(&mut self, product: ProductPage, campaign: Campaign) {
        self.product = Some(product);
        self.campaign = Some(campaign);
    }

    pub fn product(&self) -> Option<&ProductPage> {
        self.product.as_ref()
    }

    /// Title of the product the current campaign was generated for
    pub fn product_name(&self) -> &str {
        self.product.as_ref().map(|p| p.title.as_str()).unwrap_or("")
    }

    pub fn campaign(&self) -> Option<&Campaign> {
        self.campaign.as_ref()
    }

    pub(crate) fn require_campaign(&self) -> Result<&Campaign, SessionError> {
        self.campaign
            .as_ref()
            .filter(|c| !c.is_empty())
            .ok_or(SessionError::NoCampaign)
    }

    /// Replace the post text of one record for the current generation
    pub fn edit(&mut self, index: usize, text: impl Into<String>) -> Result<(), SessionError> {
        self.require_authenticated()?;
        let campaign = self.require_campaign()?;
        if index >= campaign.len() {
            return Err(SessionError::NoSuchRecord { index });
        }
        self.edits.insert((index, self.generation), text.into());
        Ok(())
    }

    /// Post text as the operator currently sees it: the edit if any, else the generated post
    pub fn current_post(&self, index: usize) -> Option<&str> {
        let record = self.campaign.as_ref()?.get(index)?;
        Some(
            self.edits
                .get(&(index, self.generation))
                .map(String::as_str)
                .unwrap_or(record.post.as_str()),
        )
    }

    pub fn is_edited(&self, index: usize) -> bool {
        self.edits.contains_key(&(index, self.generation))
    }

    /// Drop everything, authentication included
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
