use notion_client::{
    truncate_chars, CreatePageRequest, NotionError, PropertyValue, MAX_TEXT_CONTENT_CHARS,
};
use std::sync::Arc;
use tracing::{info, warn};

use super::models::PublishResult;
use crate::kernel::BaseNotesDatabase;

// Column names in the campaign database
pub const PRODUCT_NAME_PROPERTY: &str = "Product Name";
pub const PERSONA_PROPERTY: &str = "Persona";
pub const POST_PROPERTY: &str = "Generated Post";
pub const STATUS_PROPERTY: &str = "Status";

/// Status every new record starts in
pub const DRAFT_STATUS: &str = "Draft";

/// Database ids are often pasted from a Notion URL; keep only the id characters.
pub fn normalize_database_id(database_id: &str) -> String {
    database_id.trim().replace('/', "")
}

/// Page body for one caption record. The post is cut to Notion's text limit.
pub fn build_page_request(
    database_id: &str,
    product_name: &str,
    persona: &str,
    post: &str,
) -> CreatePageRequest {
    CreatePageRequest::in_database(database_id)
        .property(PRODUCT_NAME_PROPERTY, PropertyValue::title(product_name))
        .property(PERSONA_PROPERTY, PropertyValue::rich_text(persona))
        .property(
            POST_PROPERTY,
            PropertyValue::rich_text(truncate_chars(post, MAX_TEXT_CONTENT_CHARS)),
        )
        .property(STATUS_PROPERTY, PropertyValue::status(DRAFT_STATUS))
}

/// Publishes caption records one at a time.
pub struct RecordPublisher {
    notes: Arc<dyn BaseNotesDatabase>,
}

impl RecordPublisher {
    pub fn new(notes: Arc<dyn BaseNotesDatabase>) -> Self {
        Self { notes }
    }

    /// Create one draft record. Never errors: every outcome is a `PublishResult`.
    pub async fn publish(
        &self,
        product_name: &str,
        post: &str,
        persona: &str,
        token: Option<&str>,
        database_id: Option<&str>,
    ) -> PublishResult {
        let token = token.map(str::trim).filter(|t| !t.is_empty());
        let database_id = database_id
            .map(normalize_database_id)
            .filter(|id| !id.is_empty());

        let (Some(token), Some(database_id)) = (token, database_id) else {
            return PublishResult::failed("Notion Secrets Missing");
        };

        let request = build_page_request(&database_id, product_name, persona, post);

        match self.notes.create_page(token, &request).await {
            Ok(()) => {
                info!(product = %product_name, persona = %persona, "Record published");
                PublishResult::ok()
            }
            Err(e) => {
                let message = match e.downcast_ref::<NotionError>() {
                    Some(NotionError::Api { status, message }) => {
                        format!("Notion Error {}: {}", status, message)
                    }
                    _ => format!("System Error: {}", e),
                };
                warn!(product = %product_name, persona = %persona, error = %message, "Publish failed");
                PublishResult::failed(message)
            }
        }
    }
}
