use serde::{Deserialize, Serialize};

use crate::ai::Summarizer;
use crate::language::Language;
use crate::news::NewsSource;
use crate::Result;

/// A summarized article ready for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Briefing {
    pub title: String,
    pub summary: Vec<String>,
    pub url: String,
}

/// Fetch articles for a topic and summarize them one at a time.
///
/// Summarization failures are absorbed per article: the briefing keeps its
/// place in the list with a single error line as its summary. Fetch failures
/// propagate to the caller.
pub async fn build_briefings(
    source: &dyn NewsSource,
    summarizer: &Summarizer,
    topic: &str,
    language: &Language,
    limit: usize,
) -> Result<Vec<Briefing>> {
    let articles = source.fetch(topic, language, limit).await?;

    tracing::info!("Fetched {} articles for topic '{}'", articles.len(), topic);

    let mut briefings = Vec::with_capacity(articles.len());

    for article in articles {
        let summary = match summarizer.summarize(&article, language).await {
            Ok(bullets) => bullets,
            Err(e) => {
                tracing::warn!(
                    "Failed to summarize '{}': {}",
                    article.title.as_deref().unwrap_or("untitled"),
                    e
                );
                vec![format!("⚠️ Error summarizing: {}", e)]
            }
        };

        briefings.push(Briefing {
            title: article.title.unwrap_or_else(|| "No title".to_string()),
            summary,
            url: article.url.unwrap_or_else(|| "#".to_string()),
        });
    }

    Ok(briefings)
}
