// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// HTTP and extraction behavior settings
    #[serde(default)]
    pub scraper: ScraperConfig,

    /// Default rank range for CLI runs
    #[serde(default)]
    pub range: RangeConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scraper.base_url.trim().is_empty() {
            return Err(AppError::config("scraper.base_url is empty"));
        }
        if self.scraper.user_agent.trim().is_empty() {
            return Err(AppError::config("scraper.user_agent is empty"));
        }
        if self.scraper.timeout_secs == 0 {
            return Err(AppError::config("scraper.timeout_secs must be > 0"));
        }
        if self.scraper.page_size == 0 {
            return Err(AppError::config("scraper.page_size must be > 0"));
        }
        if self.scraper.row_selector.trim().is_empty() {
            return Err(AppError::config("scraper.row_selector is empty"));
        }
        if self.scraper.link_selector.trim().is_empty() {
            return Err(AppError::config("scraper.link_selector is empty"));
        }
        if self.range.start < 1 || self.range.start > self.range.end {
            return Err(AppError::config("range.start/range.end are inconsistent"));
        }
        Ok(())
    }
}

/// HTTP client and extraction behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Ranking listing URL without any page parameter
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Number of ranked entries per listing page
    #[serde(default = "defaults::page_size")]
    pub page_size: u64,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Optional language path segment appended to the base URL
    #[serde(default)]
    pub language: Option<String>,

    /// CSS selector for ranking rows
    #[serde(default = "defaults::row_selector")]
    pub row_selector: String,

    /// CSS selector for the channel link within a row
    #[serde(default = "defaults::link_selector")]
    pub link_selector: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            page_size: defaults::page_size(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            language: None,
            row_selector: defaults::row_selector(),
            link_selector: defaults::link_selector(),
        }
    }
}

/// Default rank range for CLI runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// First rank to fetch (1-based, inclusive)
    #[serde(default = "defaults::range_start")]
    pub start: u64,

    /// Last rank to fetch (inclusive)
    #[serde(default = "defaults::range_end")]
    pub end: u64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            start: defaults::range_start(),
            end: defaults::range_end(),
        }
    }
}

mod defaults {
    // Scraper defaults
    pub fn base_url() -> String {
        "https://twitchtracker.com/channels/ranking/online_time".into()
    }
    pub fn page_size() -> u64 {
        50
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
            .into()
    }
    pub fn timeout() -> u64 {
        10
    }
    pub fn row_selector() -> String {
        "table#channels tbody tr".into()
    }
    pub fn link_selector() -> String {
        "a[href]".into()
    }

    // Range defaults
    pub fn range_start() -> u64 {
        1
    }
    pub fn range_end() -> u64 {
        50
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_user_agent() {
        let mut config = Config::default();
        config.scraper.user_agent = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_page_size() {
        let mut config = Config::default();
        config.scraper.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_default_range() {
        let mut config = Config::default();
        config.range.start = 10;
        config.range.end = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_partial_toml_with_defaults() {
        let config: Config = toml::from_str(
            r#"
            [scraper]
            timeout_secs = 5

            [range]
            end = 200
            "#,
        )
        .unwrap();
        assert_eq!(config.scraper.timeout_secs, 5);
        assert_eq!(config.scraper.page_size, 50);
        assert_eq!(config.range.start, 1);
        assert_eq!(config.range.end, 200);
    }
}
