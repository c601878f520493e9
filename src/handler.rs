// src/handler.rs

//! Web-boundary request handlers.
//!
//! Typed entry points for a web front end: the outer transport layer
//! deserializes form input into a [`ScrapeRequest`] and maps
//! [`AppError::InvalidRange`] to a 4xx response. Each call builds its own
//! scraper, so concurrent requests share no mutable state.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Config, ItemRange, PageFailure, ScrapeOutcome, ScraperConfig};
use crate::services::RankScraper;
use crate::sink;

/// A scrape or download request from the web form.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeRequest {
    /// First rank to fetch (1-based, inclusive)
    #[serde(default = "defaults::start")]
    pub start: u64,

    /// Last rank to fetch (inclusive)
    #[serde(default = "defaults::end")]
    pub end: u64,

    /// Optional language filter
    #[serde(default)]
    pub language: Option<String>,
}

impl ScrapeRequest {
    /// Validate the requested range.
    pub fn range(&self) -> Result<ItemRange> {
        ItemRange::new(self.start, self.end)
    }

    /// Language filter with blank input treated as absent.
    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

mod defaults {
    pub fn start() -> u64 {
        1
    }
    pub fn end() -> u64 {
        50
    }
}

/// JSON payload answering a scrape request.
#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub success: bool,
    pub count: usize,
    pub usernames: Vec<String>,
    pub failed_pages: Vec<PageFailure>,
}

impl From<ScrapeOutcome> for ScrapeResponse {
    fn from(outcome: ScrapeOutcome) -> Self {
        Self {
            success: true,
            count: outcome.usernames.len(),
            usernames: outcome.usernames,
            failed_pages: outcome.failures,
        }
    }
}

/// CSV content plus the filename to serve it under.
#[derive(Debug)]
pub struct CsvDownload {
    pub filename: String,
    pub content: Vec<u8>,
}

/// Run a scrape for the requested range and return the JSON payload.
pub async fn handle_scrape(config: &Config, request: &ScrapeRequest) -> Result<ScrapeResponse> {
    let range = request.range()?;
    let outcome = run_scrape(config, request, &range).await?;
    Ok(ScrapeResponse::from(outcome))
}

/// Run a scrape and serialize the result as a downloadable CSV.
pub async fn handle_download(config: &Config, request: &ScrapeRequest) -> Result<CsvDownload> {
    let range = request.range()?;
    let outcome = run_scrape(config, request, &range).await?;

    Ok(CsvDownload {
        filename: download_filename(&range, request.language()),
        content: sink::csv_bytes(&outcome.usernames)?,
    })
}

async fn run_scrape(
    config: &Config,
    request: &ScrapeRequest,
    range: &ItemRange,
) -> Result<ScrapeOutcome> {
    let scraper_config = ScraperConfig {
        language: request.language().map(str::to_string),
        ..config.scraper.clone()
    };

    let scraper = RankScraper::new(&scraper_config)?;
    scraper.scrape(range).await
}

fn download_filename(range: &ItemRange, language: Option<&str>) -> String {
    match language {
        Some(language) => format!(
            "twitch_usernames_{}_{}_{}.csv",
            range.start(),
            range.end(),
            language
        ),
        None => format!("twitch_usernames_{}_{}.csv", range.start(), range.end()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::FetchFailureReason;

    #[test]
    fn request_defaults_to_first_fifty() {
        let request: ScrapeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.start, 1);
        assert_eq!(request.end, 50);
        assert!(request.language().is_none());
    }

    #[test]
    fn blank_language_is_treated_as_absent() {
        let request: ScrapeRequest =
            serde_json::from_str(r#"{"start": 1, "end": 10, "language": "  "}"#).unwrap();
        assert!(request.language().is_none());

        let request: ScrapeRequest =
            serde_json::from_str(r#"{"start": 1, "end": 10, "language": "english"}"#).unwrap();
        assert_eq!(request.language(), Some("english"));
    }

    #[tokio::test]
    async fn invalid_range_is_rejected_before_any_fetch() {
        let config = Config::default();
        let request = ScrapeRequest {
            start: 10,
            end: 5,
            language: None,
        };
        assert!(matches!(
            handle_scrape(&config, &request).await,
            Err(AppError::InvalidRange(_))
        ));
        assert!(matches!(
            handle_download(&config, &request).await,
            Err(AppError::InvalidRange(_))
        ));
    }

    #[test]
    fn response_carries_count_and_failures() {
        let outcome = ScrapeOutcome {
            usernames: vec!["a".to_string(), "b".to_string()],
            failures: vec![PageFailure {
                page: 2,
                reason: FetchFailureReason::Timeout,
            }],
            page_total: 2,
        };

        let response = ScrapeResponse::from(outcome);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["count"], 2);
        assert_eq!(json["failed_pages"][0]["page"], 2);
    }

    #[test]
    fn download_filename_convention() {
        let range = ItemRange::new(1, 150).unwrap();
        assert_eq!(
            download_filename(&range, None),
            "twitch_usernames_1_150.csv"
        );
        assert_eq!(
            download_filename(&range, Some("english")),
            "twitch_usernames_1_150_english.csv"
        );
    }
}
