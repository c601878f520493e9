// src/services/fetcher.rs

//! Ranking page fetcher.
//!
//! Fetch failures are returned as [`PageFetchOutcome::Failed`] values so the
//! scrape loop can record them and continue with the remaining pages.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::{FetchFailureReason, PageFailure, PageFetchOutcome, ScraperConfig};
use crate::utils::{http, page_url};

/// Trait for ranking page retrieval backends.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the raw markup of one ranking page.
    async fn fetch_page(&self, page: u64) -> PageFetchOutcome;
}

/// HTTP-backed page fetcher for the ranking site.
pub struct HttpPageFetcher {
    client: Client,
    base_url: String,
    language: Option<String>,
}

impl HttpPageFetcher {
    /// Create a fetcher from scraper configuration.
    ///
    /// Fails if the base URL does not parse or the client cannot be built.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        // Surface a bad base URL at construction, not per page.
        page_url(&config.base_url, config.language.as_deref(), 1)?;

        Ok(Self {
            client: http::create_client(config)?,
            base_url: config.base_url.clone(),
            language: config.language.clone(),
        })
    }

    fn failure_reason(error: &reqwest::Error) -> FetchFailureReason {
        if error.is_timeout() {
            FetchFailureReason::Timeout
        } else if let Some(status) = error.status() {
            FetchFailureReason::Status(status.as_u16())
        } else {
            FetchFailureReason::Network(error.to_string())
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page: u64) -> PageFetchOutcome {
        let url = match page_url(&self.base_url, self.language.as_deref(), page) {
            Ok(url) => url,
            Err(e) => {
                return PageFetchOutcome::Failed(PageFailure {
                    page,
                    reason: FetchFailureReason::Network(e.to_string()),
                });
            }
        };

        log::debug!("GET {}", url);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                return PageFetchOutcome::Failed(PageFailure {
                    page,
                    reason: Self::failure_reason(&e),
                });
            }
        };

        let status = response.status();
        if !status.is_success() {
            return PageFetchOutcome::Failed(PageFailure {
                page,
                reason: FetchFailureReason::Status(status.as_u16()),
            });
        }

        match response.text().await {
            Ok(markup) => PageFetchOutcome::Markup(markup),
            Err(e) => PageFetchOutcome::Failed(PageFailure {
                page,
                reason: Self::failure_reason(&e),
            }),
        }
    }
}
