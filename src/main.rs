//! Article scout HTTP server
//!
//! Serves `POST /api/search` on the configured bind address.

use std::sync::Arc;

use anyhow::{Context, Result};
use article_scout::{ArticlePipeline, ChromeLauncher, OpenAiSummarizer, ScoutConfig, api};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Not an error if the file doesn't exist
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        eprintln!("Warning: Failed to load .env: {e}");
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
                .add_directive("chromiumoxide::handler=off".parse()?)
                .add_directive("chromiumoxide::conn=off".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let config = Arc::new(ScoutConfig::from_env().context("Failed to load configuration")?);

    if config.llm_api_key().is_none() {
        info!("No completion API key configured - summaries will report failure");
    }

    let client = reqwest::Client::builder()
        .timeout(config.llm_timeout())
        .build()
        .context("Failed to build HTTP client")?;
    let summarizer = OpenAiSummarizer::from_config(client, &config);
    let launcher = ChromeLauncher::new(Arc::clone(&config));
    let pipeline = Arc::new(ArticlePipeline::new(Arc::clone(&config), launcher, summarizer)?);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(
        "Searching {}{} - listening on http://{}",
        config.target_domain(),
        config.article_path(),
        listener.local_addr()?
    );

    axum::serve(listener, api::router(pipeline)).await?;
    Ok(())
}
