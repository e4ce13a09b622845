use serde::Serialize;

/// Outcome of one publish attempt. Shown to the operator, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishResult {
    pub success: bool,
    pub message: String,
}

impl PublishResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            message: "Success".to_string(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Tally of a bulk export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Records in the campaign
    pub total: usize,
    /// Publish calls made
    pub attempted: usize,
    pub succeeded: usize,
    /// Records with an empty persona or post
    pub skipped: usize,
    /// Failure messages in campaign order, as (record index, message)
    pub failures: Vec<(usize, String)>,
}

impl ExportSummary {
    pub fn failed(&self) -> usize {
        self.attempted - self.succeeded
    }
}
