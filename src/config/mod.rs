//! Typed configuration from environment variables.
//!
//! Loads once at startup, fails fast if the API token is missing.
//! The token is wrapped in secrecy::SecretString to prevent log leaks.

use crate::error::{Error, Result};
use secrecy::SecretString;

pub const DEFAULT_API_URL: &str = "https://todoist.com/api/v7";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: SecretString,
    pub api_url: String,
    pub otel_endpoint: Option<String>,
    pub log_level: String,
}

impl Config {
    /// Build a config around an explicit token, defaults everywhere else.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: SecretString::from(api_token.into()),
            api_url: DEFAULT_API_URL.to_string(),
            otel_endpoint: None,
            log_level: "info".to_string(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// In local dev, call `dotenvy::dotenv().ok()` before this.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = required_var(&lookup, "TODOIST_API_TOKEN")?;
        let api_url = lookup("TODOIST_API_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_token: SecretString::from(api_token),
            api_url: api_url.trim_end_matches('/').to_string(),
            otel_endpoint: lookup("OTEL_ENDPOINT").filter(|e| !e.is_empty()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn required_var<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::Config(format!("required environment variable {name} is not set")))
}
