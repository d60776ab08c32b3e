use serde::{Deserialize, Serialize};

/// Placeholder used when an article carries no usable text at all
pub const NO_CONTENT_PLACEHOLDER: &str = "No content available";

/// A raw article as returned by one of the news sources
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
}

impl Article {
    /// Text to feed into summarization: content, else description, else
    /// title. Empty strings count as missing.
    pub fn summary_text(&self) -> &str {
        self.content
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.description.as_deref().filter(|s| !s.is_empty()))
            .or_else(|| self.title.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or(NO_CONTENT_PLACEHOLDER)
    }
}
