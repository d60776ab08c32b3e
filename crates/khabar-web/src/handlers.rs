use axum::{
    extract::State,
    response::Html,
    Json,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

use khabar_core::{build_briefings, Briefing, Language};

use crate::AppState;

static INDEX_HTML: &str = include_str!("../assets/index.html");

#[derive(Debug, Deserialize)]
pub struct NewsRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub language: Language,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Always answers 200 with a JSON array; a failed fetch is logged and
/// reported to the client as an empty result.
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewsRequest>,
) -> Json<Vec<Briefing>> {
    let topic = request.topic.trim();
    if topic.is_empty() {
        return Json(Vec::new());
    }

    let limit = state.config.news.max_articles;

    match build_briefings(
        state.news.as_ref(),
        &state.summarizer,
        topic,
        &request.language,
        limit,
    )
    .await
    {
        Ok(briefings) => Json(briefings),
        Err(e) => {
            warn!("News fetch failed for topic '{}': {}", topic, e);
            Json(Vec::new())
        }
    }
}
