use anyhow::Result;

use khabar_core::{ai::Summarizer, build_briefings, news::NewsFetcher, AppConfig, Language};

/// Fetch and summarize news for a topic, printing to stdout.
///
/// Unlike the HTTP endpoint, fetch errors surface here as errors.
pub async fn run(config: &AppConfig, topic: &str, language: &str, limit: Option<usize>) -> Result<()> {
    let topic = topic.trim();
    if topic.is_empty() {
        println!("Nothing to search for.");
        return Ok(());
    }

    let language = Language::parse(language);
    let limit = limit.unwrap_or(config.news.max_articles);

    let fetcher = NewsFetcher::new(config)?;
    let summarizer = Summarizer::new(config);

    println!("Fetching news for '{}'...\n", topic);

    let briefings = build_briefings(&fetcher, &summarizer, topic, &language, limit).await?;

    if briefings.is_empty() {
        println!("No articles found for '{}'.", topic);
        return Ok(());
    }

    for briefing in &briefings {
        println!("{}", briefing.title);
        for line in &briefing.summary {
            println!("  - {}", line);
        }
        println!("  {}", briefing.url);
        println!();
    }

    Ok(())
}
