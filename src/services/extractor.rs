// src/services/extractor.rs

//! Username extraction from ranking page markup.

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::ScraperConfig;

/// Extracts usernames from ranking rows using configured CSS selectors.
pub struct UsernameExtractor {
    row_selector: Selector,
    link_selector: Selector,
}

impl UsernameExtractor {
    /// Compile the configured selectors.
    pub fn from_config(config: &ScraperConfig) -> Result<Self> {
        Ok(Self {
            row_selector: Self::parse_selector(&config.row_selector)?,
            link_selector: Self::parse_selector(&config.link_selector)?,
        })
    }

    /// Extract usernames from page markup in document order.
    ///
    /// Each row contributes the first link with non-empty text and a
    /// site-relative href (rows hold a second, image-only link to the same
    /// channel). Rows without such a link are skipped. Markup with no
    /// matching rows yields an empty vec, never an error.
    pub fn extract(&self, markup: &str) -> Vec<String> {
        let document = Html::parse_document(markup);
        let mut usernames = Vec::new();

        for row in document.select(&self.row_selector) {
            for link in row.select(&self.link_selector) {
                let text: String = link.text().collect();
                let username = text.trim();
                let href = link.value().attr("href").unwrap_or("");

                if !username.is_empty() && href.starts_with('/') {
                    usernames.push(username.to_string());
                    break;
                }
            }
        }

        usernames
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}
