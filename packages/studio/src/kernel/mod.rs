//! Kernel module - infrastructure and dependencies.

pub mod gemini;
pub mod http_fetcher;
pub mod notion;
pub mod studio_kernel;
pub mod test_dependencies;
pub mod traits;

pub use gemini::GeminiAI;
pub use http_fetcher::HttpPageFetcher;
pub use notion::NotionDatabase;
pub use studio_kernel::StudioKernel;
pub use test_dependencies::{MockAI, MockNotesDatabase, MockPageFetcher, TestDependencies};
pub use traits::{BaseAI, BaseNotesDatabase, BasePageFetcher, FetchedPage};

/// User-Agent sent on product page fetches. Storefronts serve bot-looking
/// agents a stripped page or a 403.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";
