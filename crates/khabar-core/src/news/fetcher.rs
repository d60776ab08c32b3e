use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use super::models::Article;
use super::parser::parse_feed;
use super::NewsSource;
use crate::config::AppConfig;
use crate::language::Language;
use crate::{Error, Result};

const SEARCH_API_URL: &str = "https://newsapi.org/v2/everything";
const FEED_BASE_URL: &str = "https://news.google.com/rss/search";
const USER_AGENT: &str = "Mozilla/5.0 (compatible; khabar/0.1)";

/// Query string for the article search, using the API's field names
#[derive(Serialize)]
struct SearchQuery<'a> {
    q: &'a str,
    language: &'a str,
    #[serde(rename = "pageSize")]
    page_size: usize,
    #[serde(rename = "apiKey", skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<SearchArticle>,
}

#[derive(Deserialize)]
struct SearchArticle {
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    content: Option<String>,
}

impl From<SearchArticle> for Article {
    fn from(article: SearchArticle) -> Self {
        Article {
            title: article.title,
            description: article.description,
            url: article.url,
            content: article.content,
        }
    }
}

/// News fetcher backed by the article-search API for English and the
/// Google News search feed for everything else
pub struct NewsFetcher {
    client: Client,
    api_key: Option<String>,
}

impl NewsFetcher {
    /// Create a new fetcher with configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.news.request_timeout_secs))
            .user_agent(USER_AGENT)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.news.api_key.clone(),
        })
    }

    /// Build the search-feed URL for a topic and language
    fn feed_url(topic: &str, language: &Language) -> String {
        let query = topic.replace(' ', "+");
        let code = language.code();

        format!("{FEED_BASE_URL}?q={query}+language:{code}&hl={code}&gl=IN&ceid=IN:{code}")
    }

    async fn fetch_search(&self, topic: &str, limit: usize) -> Result<Vec<Article>> {
        let params = SearchQuery {
            q: topic,
            language: Language::English.code(),
            page_size: limit,
            // Left out entirely when unset; the API answers with an auth error
            api_key: self.api_key.as_deref(),
        };

        tracing::debug!("Searching articles for topic: {}", topic);

        let response = self
            .client
            .get(SEARCH_API_URL)
            .query(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::NewsApi(format!("HTTP {} from article search", status)));
        }

        let body: SearchResponse = response.json().await?;

        Ok(body.articles.into_iter().map(Article::from).collect())
    }

    async fn fetch_feed(&self, topic: &str, language: &Language, limit: usize) -> Result<Vec<Article>> {
        let url = Self::feed_url(topic, language);

        // Validate it's a proper URL
        Url::parse(&url)?;

        tracing::debug!("Fetching news feed from: {}", url);

        let content = self.get_bytes(&url).await?;
        parse_feed(&content, limit)
    }

    async fn get_bytes(&self, url: &str) -> Result<Bytes> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::FeedParse(format!("HTTP {} for URL: {}", status, url)));
        }

        Ok(response.bytes().await?)
    }
}

#[async_trait::async_trait]
impl NewsSource for NewsFetcher {
    async fn fetch(&self, topic: &str, language: &Language, limit: usize) -> Result<Vec<Article>> {
        if language.uses_search_api() {
            self.fetch_search(topic, limit).await
        } else {
            self.fetch_feed(topic, language, limit).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url_replaces_spaces() {
        let url = NewsFetcher::feed_url("ipl cricket news", &Language::Hindi);
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=ipl+cricket+news+language:hi&hl=hi&gl=IN&ceid=IN:hi"
        );
    }

    #[test]
    fn test_feed_url_carries_unknown_codes() {
        let url = NewsFetcher::feed_url("cricket", &Language::parse("ta"));
        assert_eq!(
            url,
            "https://news.google.com/rss/search?q=cricket+language:ta&hl=ta&gl=IN&ceid=IN:ta"
        );
    }

    #[test]
    fn test_fetcher_builds_with_default_config() {
        let config = AppConfig::default();
        let fetcher = NewsFetcher::new(&config).unwrap();
        assert!(fetcher.api_key.is_none());
    }

    #[test]
    fn test_search_query_omits_missing_api_key() {
        let params = SearchQuery {
            q: "cricket",
            language: "en",
            page_size: 5,
            api_key: None,
        };

        let value = serde_json::to_value(&params).unwrap();
        assert!(value.get("apiKey").is_none());
        assert_eq!(value["pageSize"], 5);
        assert_eq!(value["q"], "cricket");
    }

    #[test]
    fn test_search_response_tolerates_null_fields() {
        let json = r#"{
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": {"id": null, "name": "Example"},
                    "author": null,
                    "title": "Headline",
                    "description": null,
                    "url": "https://example.com/a",
                    "urlToImage": null,
                    "publishedAt": "2024-05-01T10:00:00Z",
                    "content": "Body text"
                },
                {"title": null, "description": "Only a description", "url": null, "content": null}
            ]
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let articles: Vec<Article> = response.articles.into_iter().map(Article::from).collect();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title.as_deref(), Some("Headline"));
        assert_eq!(articles[0].content.as_deref(), Some("Body text"));
        assert!(articles[0].description.is_none());
        assert!(articles[1].title.is_none());
        assert_eq!(articles[1].description.as_deref(), Some("Only a description"));
    }

    #[test]
    fn test_search_response_without_articles_is_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"status": "ok", "totalResults": 0}"#).unwrap();
        assert!(response.articles.is_empty());
    }
}
