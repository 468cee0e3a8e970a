//! Paperlens API server entry point.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use extraction::{Analyzer, ChatModel, HttpFetcher, OpenAiModel, UnconfiguredModel};
use openai_client::OpenAIClient;
use server_core::{build_router, AppState, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    let default_filter = if config.debug {
        "debug,server_core=trace"
    } else {
        "info,server_core=debug"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    tracing::info!(
        port = config.port,
        openai_configured = config.openai_configured(),
        model = %config.openai_model,
        "starting Paperlens API server"
    );

    let model: Arc<dyn ChatModel> = match &config.openai_api_key {
        Some(key) => Arc::new(OpenAiModel::new(
            OpenAIClient::new(key.clone()),
            config.openai_model.clone(),
            config.openai_max_tokens,
        )),
        None => {
            tracing::warn!("no OPENAI_API_KEY configured; analyze requests will return errors");
            Arc::new(UnconfiguredModel)
        }
    };

    let analyzer = Arc::new(Analyzer::new(Arc::new(HttpFetcher::new()), model));
    let state = AppState {
        config: Arc::new(config.clone()),
        analyzer,
    };

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("failed to bind port {}", config.port))?;

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
