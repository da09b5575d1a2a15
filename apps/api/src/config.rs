use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

pub const NEWS_API_KEY_PLACEHOLDER: &str = "YOUR_NEWSAPI_KEY";

const DEFAULT_SECRETS_FILE: &str = "secrets.toml";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_NEWS_API_BASE_URL: &str = "https://newsapi.org/v2";
const DEFAULT_MODEL: &str = "gpt-4o";

/// Application configuration loaded from environment variables and the local secrets file.
/// Startup fails if the completion service key cannot be resolved.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub model: String,
    pub news_api_key: String,
    pub news_api_base_url: String,
    pub llm_timeout_secs: u64,
    pub llm_max_attempts: u32,
    pub news_timeout_secs: u64,
    pub port: u16,
    pub rust_log: String,
}

/// Keys read from `secrets.toml`. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct SecretsFile {
    pub openai_api_key: Option<String>,
    pub news_api_key: Option<String>,
}

impl SecretsFile {
    /// Reads the secrets file if it exists. A missing file is not an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read secrets file '{}'", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("Failed to parse secrets file '{}'", path.display()))
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let secrets_path = std::env::var("SECRETS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SECRETS_FILE));
        let secrets = SecretsFile::load(&secrets_path)?;

        Self::from_vars(|key| std::env::var(key).ok(), &secrets)
    }

    /// Builds the config from a variable lookup and an already-loaded secrets file.
    fn from_vars(var: impl Fn(&str) -> Option<String>, secrets: &SecretsFile) -> Result<Self> {
        let optional = |key: &str| non_blank(var(key));

        Ok(Config {
            openai_api_key: resolve_openai_key(optional("OPENAI_API_KEY"), secrets)?,
            openai_base_url: optional("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_OPENAI_BASE_URL.to_string()),
            model: optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            news_api_key: resolve_news_key(secrets, optional("NEWS_API_KEY")),
            news_api_base_url: optional("NEWS_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_NEWS_API_BASE_URL.to_string()),
            llm_timeout_secs: parse_var(&var, "LLM_TIMEOUT_SECS", 120)?,
            llm_max_attempts: parse_var::<u32>(&var, "LLM_MAX_ATTEMPTS", 1)?.max(1),
            news_timeout_secs: parse_var(&var, "NEWS_TIMEOUT_SECS", 30)?,
            port: parse_var(&var, "PORT", 8080)?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn has_news_api_key(&self) -> bool {
        self.news_api_key != NEWS_API_KEY_PLACEHOLDER
    }
}

/// Environment first, then the secrets file.
fn resolve_openai_key(from_env: Option<String>, secrets: &SecretsFile) -> Result<String> {
    from_env
        .or_else(|| non_blank(secrets.openai_api_key.clone()))
        .ok_or_else(|| {
            anyhow!(
                "OpenAI API key is missing! Please set OPENAI_API_KEY in the environment or {DEFAULT_SECRETS_FILE}"
            )
        })
}

/// Secrets file first, then the environment, then the placeholder.
fn resolve_news_key(secrets: &SecretsFile, from_env: Option<String>) -> String {
    non_blank(secrets.news_api_key.clone())
        .or(from_env)
        .unwrap_or_else(|| NEWS_API_KEY_PLACEHOLDER.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(
    var: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T> {
    match non_blank(var(key)) {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow!("{key} must be a valid number, got '{raw}'")),
        None => Ok(default),
    }
}
