use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use khabar_core::{ai::Summarizer, news::NewsFetcher, AppConfig};
use khabar_web::{create_app, AppState};

/// Start the HTTP server
pub async fn run(config: Arc<AppConfig>, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.server.host.clone());
    let port = port.unwrap_or(config.server.port);

    let fetcher = NewsFetcher::new(&config)?;
    let summarizer = Summarizer::new(&config);
    info!("AI provider: {}", summarizer.provider_name());

    let state = AppState {
        config: config.clone(),
        news: Arc::new(fetcher),
        summarizer: Arc::new(summarizer),
    };

    let app = create_app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.ok();
    info!("Received shutdown signal");
}
