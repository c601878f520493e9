// src/models/scrape.rs

//! Scrape outcome types.
//!
//! Per-page fetch failures are values, not errors, so the scrape loop can
//! record them and keep going.

use std::fmt;

use serde::Serialize;

/// Result of fetching a single ranking page.
#[derive(Debug)]
pub enum PageFetchOutcome {
    /// Raw HTML body of the page
    Markup(String),
    /// The page could not be retrieved
    Failed(PageFailure),
}

/// A recorded failure for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageFailure {
    /// Page number that failed
    pub page: u64,
    /// Why the fetch failed
    pub reason: FetchFailureReason,
}

/// Why a page fetch failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "detail")]
pub enum FetchFailureReason {
    /// Request exceeded the configured timeout
    Timeout,
    /// Server answered with a non-success status code
    Status(u16),
    /// Connection-level or protocol error
    Network(String),
}

impl fmt::Display for FetchFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "timeout"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

/// Summary of a scrape run.
#[derive(Debug, Default)]
pub struct ScrapeOutcome {
    /// Usernames within the requested range, in rank order
    pub usernames: Vec<String>,
    /// Pages that could not be fetched
    pub failures: Vec<PageFailure>,
    /// Number of pages requested
    pub page_total: usize,
}

impl ScrapeOutcome {
    /// Page numbers that failed, in the order they were attempted.
    pub fn failed_pages(&self) -> Vec<u64> {
        self.failures.iter().map(|f| f.page).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_reason_display() {
        assert_eq!(FetchFailureReason::Timeout.to_string(), "timeout");
        assert_eq!(FetchFailureReason::Status(503).to_string(), "HTTP status 503");
    }

    #[test]
    fn failure_reason_serializes_with_kind_tag() {
        let json = serde_json::to_value(FetchFailureReason::Status(404)).unwrap();
        assert_eq!(json["kind"], "status");
        assert_eq!(json["detail"], 404);
    }

    #[test]
    fn failed_pages_preserves_order() {
        let outcome = ScrapeOutcome {
            usernames: vec![],
            failures: vec![
                PageFailure {
                    page: 2,
                    reason: FetchFailureReason::Timeout,
                },
                PageFailure {
                    page: 5,
                    reason: FetchFailureReason::Status(500),
                },
            ],
            page_total: 5,
        };
        assert_eq!(outcome.failed_pages(), vec![2, 5]);
    }
}
