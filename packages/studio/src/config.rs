use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Gemini model used when `GEMINI_MODEL` is not set
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

/// Per-request timeout for every outbound call
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Application configuration loaded from environment variables.
///
/// Provider credentials are optional: a missing value disables the matching
/// action with an inline message instead of failing startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub notion_token: Option<String>,
    pub notion_database_id: Option<String>,
    pub access_password: Option<String>,
    pub assets_dir: PathBuf,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            notion_token: None,
            notion_database_id: None,
            access_password: None,
            assets_dir: PathBuf::from("."),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let timeout_secs = match env::var("HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        Ok(Self {
            gemini_api_key: non_empty_var("GEMINI_API_KEY"),
            gemini_model: non_empty_var("GEMINI_MODEL")
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            notion_token: non_empty_var("NOTION_TOKEN"),
            notion_database_id: non_empty_var("NOTION_DB_ID"),
            access_password: non_empty_var("STUDIO_PASSWORD"),
            assets_dir: non_empty_var("STUDIO_ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".")),
            http_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Names of optional settings that are absent, for the startup log
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.gemini_api_key.is_none() {
            missing.push("GEMINI_API_KEY");
        }
        if self.notion_token.is_none() {
            missing.push("NOTION_TOKEN");
        }
        if self.notion_database_id.is_none() {
            missing.push("NOTION_DB_ID");
        }
        if self.access_password.is_none() {
            missing.push("STUDIO_PASSWORD");
        }
        missing
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
