//! Mirroring caption records into the Notion campaign database.

pub mod models;
pub mod publisher;

pub use models::{ExportSummary, PublishResult};
pub use publisher::{build_page_request, normalize_database_id, RecordPublisher};
