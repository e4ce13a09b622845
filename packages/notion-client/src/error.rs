//! Error types for Notion client.

use thiserror::Error;

/// Result type for Notion client operations.
pub type Result<T> = std::result::Result<T, NotionError>;

/// Notion client errors.
#[derive(Debug, Error)]
pub enum NotionError {
    /// Missing token or database id
    #[error("Configuration error: {0}")]
    Config(String),

    /// Connection failed, timeout
    #[error("Network error: {0}")]
    Network(String),

    /// Non-200 response; `message` is the raw response body
    #[error("Notion API error {status}: {message}")]
    Api { status: u16, message: String },
}
