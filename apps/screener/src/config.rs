use anyhow::{bail, Context, Result};

use crate::storage::DEFAULT_CAPACITY;

/// Application configuration loaded from environment variables.
/// Startup fails if a value is present but invalid.
#[derive(Debug, Clone)]
pub struct Config {
    /// Postgres URL; the in-memory results store is used when unset.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Default qualification threshold, 0 – 100.
    pub score_threshold: u32,
    pub max_stored_results: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: 8080,
            rust_log: "info".to_string(),
            score_threshold: 60,
            max_stored_results: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        let config = Config {
            database_url: optional_env("DATABASE_URL"),
            port: parse_env("PORT", defaults.port).context("PORT must be a valid port number")?,
            rust_log: optional_env("RUST_LOG").unwrap_or(defaults.rust_log),
            score_threshold: parse_env("SCORE_THRESHOLD", defaults.score_threshold)
                .context("SCORE_THRESHOLD must be an integer")?,
            max_stored_results: parse_env("MAX_STORED_RESULTS", defaults.max_stored_results)
                .context("MAX_STORED_RESULTS must be a positive integer")?,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.score_threshold > 100 {
            bail!(
                "SCORE_THRESHOLD must be between 0 and 100, got {}",
                self.score_threshold
            );
        }
        if self.max_stored_results == 0 {
            bail!("MAX_STORED_RESULTS must be at least 1");
        }
        Ok(())
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for '{key}': {raw}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.score_threshold, 60);
        assert_eq!(config.max_stored_results, 50);
        assert!(config.database_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_threshold() {
        let config = Config {
            score_threshold: 101,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_capacity() {
        let config = Config {
            max_stored_results: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
