// src/services/ranking.rs

//! Ranking scrape orchestration.
//!
//! Drives the page mapper, fetcher and extractor over every page a range
//! needs, sequentially and in ascending page order. Per-page fetch failures
//! are recorded and skipped; only range validation and setup errors abort
//! a run.

use crate::error::Result;
use crate::models::{ItemRange, PageFetchOutcome, ScrapeOutcome, ScraperConfig};
use crate::services::extractor::UsernameExtractor;
use crate::services::fetcher::{HttpPageFetcher, PageFetcher};

/// Scrapes usernames for a rank range from the ranking site.
pub struct RankScraper {
    page_size: u64,
    fetcher: Box<dyn PageFetcher>,
    extractor: UsernameExtractor,
}

impl RankScraper {
    /// Create a scraper backed by the HTTP fetcher.
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let fetcher = HttpPageFetcher::new(config)?;
        Self::with_fetcher(config, Box::new(fetcher))
    }

    /// Create a scraper with a custom fetcher backend.
    pub fn with_fetcher(config: &ScraperConfig, fetcher: Box<dyn PageFetcher>) -> Result<Self> {
        Ok(Self {
            page_size: config.page_size,
            fetcher,
            extractor: UsernameExtractor::from_config(config)?,
        })
    }

    /// Fetch all pages covering `range` and collect the usernames whose
    /// rank positions fall inside it.
    ///
    /// Each extracted name is positioned by its own page's nominal offset
    /// (`(page - 1) * page_size + local index + 1`), so a short or failed
    /// page never shifts the items of later pages. A page holding fewer
    /// names than requested simply yields a shorter result.
    pub async fn scrape(&self, range: &ItemRange) -> Result<ScrapeOutcome> {
        let pages = range.pages(self.page_size);
        log::info!(
            "Scraping pages {:?} for ranks {}..{}",
            pages,
            range.start(),
            range.end()
        );

        let mut outcome = ScrapeOutcome {
            page_total: pages.len(),
            ..ScrapeOutcome::default()
        };

        for page in pages {
            match self.fetcher.fetch_page(page).await {
                PageFetchOutcome::Markup(markup) => {
                    let names = self.extractor.extract(&markup);
                    if names.is_empty() {
                        log::warn!("No usernames found on page {page}");
                    } else {
                        log::debug!("Found {} usernames on page {page}", names.len());
                    }

                    let offset = (page - 1) * self.page_size;
                    for (index, name) in names.into_iter().enumerate() {
                        let rank = offset + index as u64 + 1;
                        if range.contains(rank) {
                            outcome.usernames.push(name);
                        }
                    }
                }
                PageFetchOutcome::Failed(failure) => {
                    log::warn!("Failed to fetch page {}: {}", failure.page, failure.reason);
                    outcome.failures.push(failure);
                }
            }
        }

        log::info!(
            "Scrape finished: {} usernames, {} of {} pages failed",
            outcome.usernames.len(),
            outcome.failures.len(),
            outcome.page_total
        );

        Ok(outcome)
    }
}
