//! Typed errors for the studio domains.
//!
//! Kernel traits speak `anyhow`; these enums are what the domains and the
//! session surface to the operator.

use thiserror::Error;

/// Product page extraction failures. Only the HTML stage produces these;
/// structured-data failures fall through to the next strategy.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Page could not be fetched (timeout, DNS, connection refused)
    #[error("Scrape Error: {0}")]
    Fetch(String),

    /// Response arrived but could not be read as expected
    #[error("Scrape Error: unreadable response: {0}")]
    Decode(String),

    /// URL was blank after trimming
    #[error("Scrape Error: empty URL")]
    EmptyUrl,
}

/// Caption generation failures. `CaptionGenerator::generate` folds these into
/// a single `Error` record; `try_generate` returns them as-is.
#[derive(Debug, Error)]
pub enum CaptionError {
    #[error("API key missing")]
    MissingApiKey,

    /// Transport or provider failure
    #[error("{0}")]
    Provider(String),

    /// Model replied with something that is not the expected JSON array
    #[error("could not parse model output as captions: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Operator action failures surfaced by the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("⚠️ ACCESS DENIED")]
    AccessDenied,

    #[error("Access password not configured")]
    PasswordNotConfigured,

    #[error("Session locked. Unlock first.")]
    Locked,

    #[error("API Key Missing.")]
    MissingApiKey,

    #[error("Paste a URL first.")]
    MissingUrl,

    #[error("Notion Config Missing")]
    MissingNotionConfig,

    #[error("Nothing generated yet.")]
    NoCampaign,

    #[error("No caption at position {index}")]
    NoSuchRecord { index: usize },

    #[error(transparent)]
    Extraction(#[from] ExtractError),
}
