use std::sync::Arc;

use super::providers::{AiProvider, GeminiProvider, OpenAiProvider};
use crate::config::AppConfig;
use crate::language::Language;
use crate::news::Article;
use crate::{Error, Result};

/// Longest article slice sent to the provider, in characters
pub const CONTENT_CHAR_LIMIT: usize = 1500;

fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

/// AI summarizer that wraps the configured provider
pub struct Summarizer {
    provider: Arc<dyn AiProvider>,
}

impl Summarizer {
    /// Create a new summarizer based on configuration
    pub fn new(config: &AppConfig) -> Self {
        let max_tokens = config.ai.max_summary_tokens.max(1);

        let provider: Arc<dyn AiProvider> = match config.ai.provider.as_str() {
            "openai" => Arc::new(OpenAiProvider::new(
                config.ai.openai_api_key.as_deref(),
                &config.ai.openai_model,
                max_tokens,
            )),
            _ => Arc::new(GeminiProvider::new(
                config.ai.gemini_api_key.as_deref(),
                &config.ai.gemini_model,
                max_tokens,
            )),
        };

        Self { provider }
    }

    /// Create a summarizer with an explicit provider
    pub fn with_provider(provider: Arc<dyn AiProvider>) -> Self {
        Self { provider }
    }

    /// Name of the active provider
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Summarize an article into bullet-point sentences in the given language
    pub async fn summarize(&self, article: &Article, language: &Language) -> Result<Vec<String>> {
        let input = truncate_chars(article.summary_text(), CONTENT_CHAR_LIMIT);

        let prompt = format!(
            "Summarize the following article in 2-3 concise bullet points in {}.\n\
Do NOT include any '-' or numbering, just plain sentences for each bullet.\n\n\
Article:\n{}",
            language.prompt_name(),
            input
        );

        let text = self.provider.generate(&prompt).await?;

        let bullets: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();

        if bullets.is_empty() {
            return Err(Error::AiProvider("Provider returned an empty completion".to_string()));
        }

        Ok(bullets)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct StubProvider {
        response: String,
        fail: bool,
        prompts: Mutex<Vec<String>>,
    }

    impl StubProvider {
        fn replying(response: &str) -> Arc<Self> {
            Arc::new(Self {
                response: response.to_string(),
                fail: false,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                response: String::new(),
                fail: true,
                prompts: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait::async_trait]
    impl AiProvider for StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if self.fail {
                return Err(Error::AiProvider("boom".to_string()));
            }
            Ok(self.response.clone())
        }
    }

    fn article_with_content(content: &str) -> Article {
        Article {
            title: Some("Headline".to_string()),
            description: None,
            url: None,
            content: Some(content.to_string()),
        }
    }

    #[tokio::test]
    async fn test_bullets_are_split_and_trimmed() {
        let provider = StubProvider::replying("  One sentence.  \n\nTwo sentence.\n   \nThree.");
        let summarizer = Summarizer::with_provider(provider);

        let bullets = summarizer
            .summarize(&article_with_content("Some article body."), &Language::English)
            .await
            .unwrap();

        assert_eq!(bullets, vec!["One sentence.", "Two sentence.", "Three."]);
    }

    #[tokio::test]
    async fn test_prompt_names_the_language() {
        let provider = StubProvider::replying("A line.");
        let summarizer = Summarizer::with_provider(provider.clone());

        summarizer
            .summarize(&article_with_content("Body."), &Language::Hindi)
            .await
            .unwrap();

        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].contains("in Hindi."));
    }

    #[tokio::test]
    async fn test_prompt_falls_back_through_article_fields() {
        let provider = StubProvider::replying("A line.");
        let summarizer = Summarizer::with_provider(provider.clone());

        let title_only = Article {
            title: Some("Solar storms".to_string()),
            ..Article::default()
        };
        summarizer.summarize(&title_only, &Language::English).await.unwrap();

        summarizer
            .summarize(&Article::default(), &Language::English)
            .await
            .unwrap();

        let prompts = provider.prompts.lock().unwrap();
        assert!(prompts[0].ends_with("Article:\nSolar storms"));
        assert!(prompts[1].ends_with("Article:\nNo content available"));
    }

    #[tokio::test]
    async fn test_content_is_capped_at_char_limit() {
        let provider = StubProvider::replying("A line.");
        let summarizer = Summarizer::with_provider(provider.clone());

        let long = "ñ".repeat(CONTENT_CHAR_LIMIT + 500);
        summarizer
            .summarize(&article_with_content(&long), &Language::English)
            .await
            .unwrap();

        let prompts = provider.prompts.lock().unwrap();
        let sent = prompts[0].chars().filter(|c| *c == 'ñ').count();
        assert_eq!(sent, CONTENT_CHAR_LIMIT);
    }

    #[tokio::test]
    async fn test_provider_failure_propagates() {
        let summarizer = Summarizer::with_provider(StubProvider::failing());

        let result = summarizer
            .summarize(&article_with_content("Body."), &Language::English)
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_blank_completion_is_an_error() {
        let summarizer = Summarizer::with_provider(StubProvider::replying("  \n \n"));

        let err = summarizer
            .summarize(&article_with_content("Body."), &Language::English)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("empty completion"));
    }

    #[test]
    fn test_unknown_provider_name_defaults_to_gemini() {
        let mut config = AppConfig::default();
        config.ai.provider = "mystery".to_string();

        let summarizer = Summarizer::new(&config);
        assert_eq!(summarizer.provider_name(), "gemini");
    }

    #[test]
    fn test_openai_provider_is_selected_by_name() {
        let mut config = AppConfig::default();
        config.ai.provider = "openai".to_string();

        let summarizer = Summarizer::new(&config);
        assert_eq!(summarizer.provider_name(), "openai");
    }
}
