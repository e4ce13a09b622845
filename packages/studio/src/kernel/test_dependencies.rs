// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into StudioKernel for tests.

use anyhow::Result;
use async_trait::async_trait;
use notion_client::{CreatePageRequest, NotionError};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseNotesDatabase, BasePageFetcher, FetchedPage, StudioKernel};

// =============================================================================
// Mock Page Fetcher
// =============================================================================

#[derive(Clone)]
enum MockFetch {
    Response { status: u16, body: String },
    Failure(String),
}

/// Serves canned responses by exact URL. Unknown URLs answer 404.
#[derive(Clone, Default)]
pub struct MockPageFetcher {
    routes: Arc<Mutex<HashMap<String, MockFetch>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with HTTP 200 and `body`
    pub fn with_page(self, url: &str, body: &str) -> Self {
        self.with_status(url, 200, body)
    }

    pub fn with_status(self, url: &str, status: u16, body: &str) -> Self {
        self.routes.lock().unwrap().insert(
            url.to_string(),
            MockFetch::Response {
                status,
                body: body.to_string(),
            },
        );
        self
    }

    /// Fail `url` at the transport level
    pub fn with_failure(self, url: &str, message: &str) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), MockFetch::Failure(message.to_string()));
        self
    }

    /// All URLs fetched, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn was_fetched(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|u| u == url)
    }
}

#[async_trait]
impl BasePageFetcher for MockPageFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        self.calls.lock().unwrap().push(url.to_string());

        let route = self.routes.lock().unwrap().get(url).cloned();
        match route {
            Some(MockFetch::Response { status, body }) => Ok(FetchedPage {
                url: url.to_string(),
                status,
                body,
            }),
            Some(MockFetch::Failure(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(FetchedPage {
                url: url.to_string(),
                status: 404,
                body: String::new(),
            }),
        }
    }
}

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a completion call
#[derive(Debug, Clone)]
pub struct CompleteCall {
    pub api_key: String,
    pub prompt: String,
}

/// Returns queued responses in order; an empty queue yields a four-record campaign.
#[derive(Clone, Default)]
pub struct MockAI {
    responses: Arc<Mutex<VecDeque<Result<String, String>>>>,
    calls: Arc<Mutex<Vec<CompleteCall>>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(self, text: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub fn with_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<CompleteCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.calls.lock().unwrap().last().map(|c| c.prompt.clone())
    }
}

/// Well-formed model reply used when no response is queued
pub const DEFAULT_CAMPAIGN_JSON: &str = r#"```json
[
    {"persona": "The Headline Bride", "post": "All eyes on the snatched waist."},
    {"persona": "The Global It-Girl", "post": "Lagos tonight, Paris tomorrow. Sculpted either way."},
    {"persona": "The Power Curve", "post": "Executive presence in hourglass corsetry."},
    {"persona": "Tubo Woman Signature", "post": "She enters. The room stops."}
]
```"#;

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, api_key: &str, prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(CompleteCall {
            api_key: api_key.to_string(),
            prompt: prompt.to_string(),
        });

        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(DEFAULT_CAMPAIGN_JSON.to_string()),
        }
    }
}

// =============================================================================
// Mock Notes Database
// =============================================================================

/// Captured page creation
#[derive(Debug, Clone)]
pub struct CreatePageCall {
    pub token: String,
    pub body: serde_json::Value,
}

/// Accepts every page unless outcomes are queued. A queued `false` rejects
/// that call with HTTP 400.
#[derive(Clone, Default)]
pub struct MockNotesDatabase {
    outcomes: Arc<Mutex<VecDeque<bool>>>,
    calls: Arc<Mutex<Vec<CreatePageCall>>>,
}

impl MockNotesDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue accept/reject outcomes for the next calls, in order
    pub fn with_outcomes(self, outcomes: &[bool]) -> Self {
        self.outcomes.lock().unwrap().extend(outcomes.iter().copied());
        self
    }

    pub fn calls(&self) -> Vec<CreatePageCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseNotesDatabase for MockNotesDatabase {
    async fn create_page(&self, token: &str, request: &CreatePageRequest) -> Result<()> {
        self.calls.lock().unwrap().push(CreatePageCall {
            token: token.to_string(),
            body: serde_json::to_value(request)?,
        });

        let accept = self.outcomes.lock().unwrap().pop_front().unwrap_or(true);
        if accept {
            Ok(())
        } else {
            Err(NotionError::Api {
                status: 400,
                message: r#"{"object":"error","code":"validation_error"}"#.to_string(),
            }
            .into())
        }
    }
}

// =============================================================================
// TestDependencies builder
// =============================================================================

/// Bundles mocks so tests keep handles for assertions after building a kernel.
#[derive(Clone, Default)]
pub struct TestDependencies {
    pub fetcher: MockPageFetcher,
    pub ai: MockAI,
    pub notes: MockNotesDatabase,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mock_fetcher(mut self, fetcher: MockPageFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = ai;
        self
    }

    pub fn mock_notes(mut self, notes: MockNotesDatabase) -> Self {
        self.notes = notes;
        self
    }

    pub fn into_kernel(self) -> StudioKernel {
        StudioKernel::new(
            Arc::new(self.fetcher),
            Arc::new(self.ai),
            Arc::new(self.notes),
        )
    }
}
