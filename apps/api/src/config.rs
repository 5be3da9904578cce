use anyhow::{Context, Result};

const DEFAULT_UPSTREAM_API_URL: &str = "http://localhost:8000/api";

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup only fails on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Base URL of the CV store API; records live at `{url}/cvs/{id}`.
    pub upstream_api_url: String,
    pub upstream_api_token: Option<String>,
    /// Appended to the built-in technical vocabulary.
    pub extra_technical_keywords: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            upstream_api_url: optional_env("UPSTREAM_API_URL")
                .unwrap_or_else(|| DEFAULT_UPSTREAM_API_URL.to_string()),
            upstream_api_token: optional_env("UPSTREAM_API_TOKEN"),
            extra_technical_keywords: optional_env("EXTRA_TECHNICAL_KEYWORDS")
                .map(|list| parse_keyword_list(&list))
                .unwrap_or_default(),
        })
    }
}

/// Unset and blank variables are both `None`.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_keyword_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keyword_list() {
        assert_eq!(
            parse_keyword_list(" Rust, ,Elixir ,"),
            vec!["rust".to_string(), "elixir".to_string()]
        );
        assert!(parse_keyword_list("").is_empty());
    }
}
