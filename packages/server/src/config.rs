use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Placeholder key shipped in .env templates; treated the same as unset.
const PLACEHOLDER_API_KEY: &str = "your-actual-api-key-here";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_max_tokens: u32,
    pub port: u16,
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty() && key.as_str() != PLACEHOLDER_API_KEY);

        Ok(Self {
            openai_api_key,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_max_tokens: env::var("OPENAI_MAX_TOKENS")
                .unwrap_or_else(|_| "4000".to_string())
                .parse()
                .context("OPENAI_MAX_TOKENS must be a valid number")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            debug: env::var("SERVER_DEBUG")
                .unwrap_or_else(|_| "false".to_string())
                .to_lowercase()
                .parse()
                .unwrap_or(false),
        })
    }

    /// Whether a usable API key is present.
    pub fn openai_configured(&self) -> bool {
        self.openai_api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key(key: Option<&str>) -> Config {
        Config {
            openai_api_key: key
                .map(str::to_string)
                .filter(|k| !k.is_empty() && k.as_str() != PLACEHOLDER_API_KEY),
            openai_model: "gpt-4o-mini".into(),
            openai_max_tokens: 4000,
            port: 8000,
            debug: false,
        }
    }

    #[test]
    fn test_placeholder_key_counts_as_unconfigured() {
        assert!(!config_with_key(Some(PLACEHOLDER_API_KEY)).openai_configured());
        assert!(!config_with_key(None).openai_configured());
        assert!(config_with_key(Some("sk-real")).openai_configured());
    }
}
