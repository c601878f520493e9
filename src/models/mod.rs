// src/models/mod.rs

//! Domain models for the scraper application.

mod config;
mod range;
mod scrape;

// Re-export all public types
pub use config::{Config, RangeConfig, ScraperConfig};
pub use range::ItemRange;
pub use scrape::{FetchFailureReason, PageFailure, PageFetchOutcome, ScrapeOutcome};
