//! Product page extraction: ordered strategies, then heuristic line filtering.

pub mod extractor;
pub mod filter;
pub mod html;
pub mod models;
pub mod strategies;

pub use extractor::Extractor;
pub use filter::filter_description;
pub use models::{ExtractionCandidate, ExtractionTarget, ProductPage, DEFAULT_TITLE, NO_TEXT_SENTINEL};
pub use strategies::{ExtractionStrategy, FailurePolicy, HtmlPageStrategy, StructuredDataStrategy};
