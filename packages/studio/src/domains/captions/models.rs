use serde::{Deserialize, Serialize};

/// Persona carried by the single record of a failed generation
pub const ERROR_PERSONA: &str = "Error";

/// Shown in place of an empty persona
pub const UNKNOWN_PERSONA: &str = "Unknown";

/// One caption as the model returns it: `{"persona": ..., "post": ...}`.
/// Missing fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptionRecord {
    #[serde(default)]
    pub persona: String,
    #[serde(default)]
    pub post: String,
}

impl CaptionRecord {
    pub fn new(persona: impl Into<String>, post: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
            post: post.into(),
        }
    }

    /// Persona for headings; never empty
    pub fn display_persona(&self) -> &str {
        if self.persona.trim().is_empty() {
            UNKNOWN_PERSONA
        } else {
            &self.persona
        }
    }
}

/// All caption records generated for one product, in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Campaign {
    pub records: Vec<CaptionRecord>,
}

impl Campaign {
    pub fn new(records: Vec<CaptionRecord>) -> Self {
        Self { records }
    }

    /// Single-record campaign that shows a generation failure inline
    pub fn from_error(reason: impl std::fmt::Display) -> Self {
        Self::new(vec![CaptionRecord::new(
            ERROR_PERSONA,
            format!("AI ERROR: {}", reason),
        )])
    }

    pub fn is_error(&self) -> bool {
        self.records.len() == 1 && self.records[0].persona == ERROR_PERSONA
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&CaptionRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CaptionRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let records: Vec<CaptionRecord> =
            serde_json::from_str(r#"[{"persona": "The Power Curve"}, {"post": "Snatched."}]"#).unwrap();

        assert_eq!(records[0].post, "");
        assert_eq!(records[1].persona, "");
        assert_eq!(records[1].display_persona(), UNKNOWN_PERSONA);
    }

    #[test]
    fn test_error_campaign_shape() {
        let campaign = Campaign::from_error("quota exceeded");

        assert!(campaign.is_error());
        assert_eq!(campaign.len(), 1);
        assert_eq!(campaign.records[0].post, "AI ERROR: quota exceeded");
    }

    #[test]
    fn test_campaign_serializes_as_array() {
        let campaign = Campaign::new(vec![CaptionRecord::new("A", "B")]);
        assert_eq!(
            serde_json::to_string(&campaign).unwrap(),
            r#"[{"persona":"A","post":"B"}]"#
        );
    }
}
