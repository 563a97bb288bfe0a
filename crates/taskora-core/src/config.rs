//! Client configuration.
//!
//! Configuration comes from the environment (with optional `.env` support)
//! rather than a file on disk; the embedding web host injects these values
//! at startup.

use anyhow::{Context, Result};

use crate::cache::DEFAULT_MAX_AGE_MS;

/// Production API endpoint
const DEFAULT_API_BASE_URL: &str = "https://api.taskora.app";

/// Environment variable overriding the API endpoint
const ENV_API_BASE_URL: &str = "TASKORA_API_BASE_URL";

/// Environment variable overriding the staleness window (milliseconds)
const ENV_CACHE_MAX_AGE_MS: &str = "TASKORA_CACHE_MAX_AGE_MS";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub cache_max_age_ms: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            cache_max_age_ms: DEFAULT_MAX_AGE_MS,
        }
    }
}

impl Config {
    /// Load configuration from the environment. Missing variables fall back
    /// to defaults; a malformed staleness window is an error rather than a
    /// silently substituted default.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (silently ignore if not found)
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(url) = std::env::var(ENV_API_BASE_URL) {
            config.api_base_url = url;
        }
        if let Ok(raw) = std::env::var(ENV_CACHE_MAX_AGE_MS) {
            config.cache_max_age_ms = raw
                .parse()
                .with_context(|| format!("Invalid {} value: {}", ENV_CACHE_MAX_AGE_MS, raw))?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "https://api.taskora.app");
        assert_eq!(config.cache_max_age_ms, 300_000);
    }
}
