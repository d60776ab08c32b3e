use feed_rs::parser;

use super::models::Article;
use crate::{Error, Result};

/// Parse syndication-feed content into articles, keeping feed order.
///
/// Google News search feeds put the article blurb into the entry summary as
/// an HTML fragment; it is stripped to plain text and used for both the
/// description and the content, since the feed carries no full body.
pub fn parse_feed(content: &[u8], limit: usize) -> Result<Vec<Article>> {
    let feed = parser::parse(content)
        .map_err(|e| Error::FeedParse(e.to_string()))?;

    let articles = feed
        .entries
        .into_iter()
        .take(limit)
        .map(|entry| {
            let title = entry.title.map(|t| t.content);
            let url = entry.links.first().map(|l| l.href.clone());
            let summary = entry.summary.map(|s| html_to_text(&s.content));

            Article {
                title,
                description: summary.clone(),
                url,
                content: summary,
            }
        })
        .collect();

    Ok(articles)
}

/// Convert HTML content to plain text
fn html_to_text(html: &str) -> String {
    html2text::from_read(html.as_bytes(), 80)
        .unwrap_or_else(|_| html.to_string())
}
