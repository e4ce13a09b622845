// Shared harness for session-level tests

#![allow(dead_code)]

use studio_core::kernel::{MockAI, MockNotesDatabase, MockPageFetcher, TestDependencies};
use studio_core::{Config, Session, Studio};

pub const PRODUCT_URL: &str = "https://tubo.example/products/aria-corset-gown?variant=7";
pub const PRODUCT_JSON_URL: &str = "https://tubo.example/products/aria-corset-gown.json";
pub const PASSWORD: &str = "curves";

pub const PRODUCT_JSON: &str = r#"{
  "product": {
    "title": "Aria Corset Gown",
    "body_html": "<p>Structured corset bodice with spiral boning</p><p>Free shipping on orders over $300</p><ul><li>Floor-length satin skirt</li><li>Size guide below</li></ul>"
  }
}"#;

pub struct TestHarness {
    pub studio: Studio,
    pub session: Session,
    pub deps: TestDependencies,
}

impl TestHarness {
    /// Fully configured studio whose fetcher serves the product JSON
    pub fn new() -> Self {
        Self::build(TestDependencies::new(), full_config())
    }

    pub fn with_config(config: Config) -> Self {
        Self::build(TestDependencies::new(), config)
    }

    pub fn with_ai(ai: MockAI) -> Self {
        Self::build(TestDependencies::new().mock_ai(ai), full_config())
    }

    pub fn with_notes(notes: MockNotesDatabase) -> Self {
        Self::build(TestDependencies::new().mock_notes(notes), full_config())
    }

    /// Uses `fetcher` as given; no product route is added
    pub fn with_fetcher(fetcher: MockPageFetcher) -> Self {
        let deps = TestDependencies::new().mock_fetcher(fetcher);
        Self::from_parts(deps, full_config())
    }

    fn build(deps: TestDependencies, config: Config) -> Self {
        // Mocks share state across clones, so registering here is visible to the kernel
        let fetcher = deps.fetcher.clone().with_page(PRODUCT_JSON_URL, PRODUCT_JSON);
        Self::from_parts(deps.mock_fetcher(fetcher), config)
    }

    fn from_parts(deps: TestDependencies, config: Config) -> Self {
        let studio = Studio::new(config, deps.clone().into_kernel());
        Self {
            studio,
            session: Session::new(),
            deps,
        }
    }

    pub fn unlocked(mut self) -> Self {
        self.studio
            .unlock(&mut self.session, PASSWORD)
            .expect("unlock with the configured password");
        self
    }

    pub async fn generated(mut self) -> Self {
        self.studio
            .generate(&mut self.session, PRODUCT_URL)
            .await
            .expect("generate campaign");
        self
    }
}

pub fn full_config() -> Config {
    Config {
        gemini_api_key: Some("g-test-key".into()),
        notion_token: Some("secret_test".into()),
        notion_database_id: Some(" 0123abcd/4567 ".into()),
        access_password: Some(PASSWORD.into()),
        ..Config::default()
    }
}
