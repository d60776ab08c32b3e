pub mod fetcher;
pub mod models;
pub mod parser;

pub use fetcher::NewsFetcher;
pub use models::{Article, NO_CONTENT_PLACEHOLDER};
pub use parser::parse_feed;

use crate::language::Language;
use crate::Result;

/// A source of news articles for a topic
#[async_trait::async_trait]
pub trait NewsSource: Send + Sync {
    /// Fetch up to `limit` articles about `topic` in `language`
    async fn fetch(&self, topic: &str, language: &Language, limit: usize) -> Result<Vec<Article>>;
}
