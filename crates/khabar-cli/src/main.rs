use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use khabar_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "khabar")]
#[command(author, version, about = "Topic news briefings with AI bullet-point summaries")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides config)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Fetch and summarize news for a topic
    Fetch {
        /// Topic to search for
        topic: String,
        /// Language code for articles and summaries (en, hi, mr)
        #[arg(short, long, default_value = "en")]
        language: String,
        /// Maximum number of articles (overrides config)
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            commands::serve::run(config, host, port).await
        }
        Some(Commands::Fetch { topic, language, limit }) => {
            commands::fetch::run(&config, &topic, &language, limit).await
        }
        None => {
            // Serving is the default
            commands::serve::run(config, None, None).await
        }
    }
}
