use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Body for `POST /v1/pages` with a database parent.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: BTreeMap<String, PropertyValue>,
}

impl CreatePageRequest {
    /// Start a page inside the given database.
    pub fn in_database(database_id: impl Into<String>) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.into(),
            },
            properties: BTreeMap::new(),
        }
    }

    /// Set a property by its column name.
    pub fn property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Parent {
    pub database_id: String,
}

/// Property values understood by the page-creation endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    Status { status: StatusOption },
}

impl PropertyValue {
    /// Title column holding plain text.
    pub fn title(content: impl Into<String>) -> Self {
        Self::Title {
            title: vec![RichText::plain(content)],
        }
    }

    /// Rich-text column holding plain text.
    pub fn rich_text(content: impl Into<String>) -> Self {
        Self::RichText {
            rich_text: vec![RichText::plain(content)],
        }
    }

    /// Status column set to the named option.
    pub fn status(name: impl Into<String>) -> Self {
        Self::Status {
            status: StatusOption { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RichText {
    pub text: TextContent,
}

impl RichText {
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextContent {
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusOption {
    pub name: String,
}

/// Created page, as returned by Notion. Only the fields we log are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_page_body_shape() {
        let request = CreatePageRequest::in_database("db123")
            .property("Product Name", PropertyValue::title("Corset Gown"))
            .property("Persona", PropertyValue::rich_text("The Power Curve"))
            .property("Status", PropertyValue::status("Draft"));

        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "parent": {"database_id": "db123"},
                "properties": {
                    "Product Name": {"title": [{"text": {"content": "Corset Gown"}}]},
                    "Persona": {"rich_text": [{"text": {"content": "The Power Curve"}}]},
                    "Status": {"status": {"name": "Draft"}}
                }
            })
        );
    }

    #[test]
    fn test_page_ignores_unknown_fields() {
        let page: Page = serde_json::from_str(
            r#"{"object": "page", "id": "abc", "created_time": "2024-05-01T10:00:00.000Z"}"#,
        )
        .unwrap();

        assert_eq!(page.id, "abc");
        assert!(page.url.is_none());
    }
}
