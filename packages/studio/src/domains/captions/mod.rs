//! Brand-voice caption generation.

pub mod generator;
pub mod models;
pub mod prompt;

pub use generator::CaptionGenerator;
pub use models::{Campaign, CaptionRecord, ERROR_PERSONA};
pub use prompt::{build_prompt, parse_campaign, strip_code_fence};
