use serde::{Deserialize, Serialize};

/// Title used until a strategy finds a better one
pub const DEFAULT_TITLE: &str = "Tubo Piece";

/// Description placeholder when nothing survives filtering
pub const NO_TEXT_SENTINEL: &str = "[NO TEXT FOUND]";

/// Product as handed to the caption generator. Lives for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub url: String,
    pub title: String,
    pub description: String,
}

impl ProductPage {
    /// False when the description is the no-text sentinel
    pub fn has_description(&self) -> bool {
        self.description != NO_TEXT_SENTINEL
    }
}

/// URL forms the strategies work from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionTarget {
    /// URL as the operator pasted it (trimmed)
    pub original: String,
    /// URL with the query string removed
    pub clean: String,
}

impl ExtractionTarget {
    pub fn new(url: &str) -> Self {
        let original = url.trim().to_string();
        let clean = original
            .split('?')
            .next()
            .unwrap_or_default()
            .to_string();
        Self { original, clean }
    }

    /// Shopify-style structured-data endpoint for this product
    pub fn structured_data_url(&self) -> String {
        format!("{}.json", self.clean)
    }
}

/// What one strategy found: an optional title and unfiltered text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionCandidate {
    pub title: Option<String>,
    pub text: String,
}

impl ExtractionCandidate {
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
