// src/services/mod.rs

//! Service layer for the scraper application.
//!
//! This module contains the business logic for:
//! - Page retrieval (`PageFetcher` / `HttpPageFetcher`)
//! - Username extraction (`UsernameExtractor`)
//! - Scrape orchestration (`RankScraper`)

mod extractor;
mod fetcher;
mod ranking;

pub use extractor::UsernameExtractor;
pub use fetcher::{HttpPageFetcher, PageFetcher};
pub use ranking::RankScraper;
