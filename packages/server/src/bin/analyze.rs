//! Command-line paper analysis.
//!
//! With an API key configured this prints the model's JSON response; without
//! one it prints the generated prompt so the pipeline can be inspected at no
//! cost.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use extraction::{
    AnalysisKind, AnalysisRequest, Analyzer, ChatModel, HttpFetcher, OpenAiModel,
    UnconfiguredModel,
};
use openai_client::OpenAIClient;
use server_core::Config;

#[derive(Parser)]
#[command(name = "analyze", about = "Analyze an academic paper from a URL")]
struct Args {
    /// Paper URL
    url: String,

    /// Analysis type: full or quick
    #[arg(default_value = "full")]
    analysis_type: String,

    /// Explain results in plain language
    #[arg(long)]
    eli12: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;

    let request = AnalysisRequest {
        url: args.url,
        kind: AnalysisKind::from_type_str(&args.analysis_type),
        eli12: args.eli12,
    };
    let fetcher = Arc::new(HttpFetcher::new());

    match &config.openai_api_key {
        Some(key) => {
            let model: Arc<dyn ChatModel> = Arc::new(OpenAiModel::new(
                OpenAIClient::new(key.clone()),
                config.openai_model.clone(),
                config.openai_max_tokens,
            ));
            let analyzer = Analyzer::new(fetcher, model);
            println!("{}", analyzer.analyze(&request).await);
        }
        None => {
            let analyzer = Analyzer::new(fetcher, Arc::new(UnconfiguredModel));
            println!("=== GENERATED PROMPT ===");
            println!("{}", analyzer.build_prompt(&request).await);
            println!("\n=== NOTE ===");
            println!("Set OPENAI_API_KEY in your environment or .env to get analysis results.");
        }
    }

    Ok(())
}
