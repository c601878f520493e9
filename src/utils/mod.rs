// src/utils/mod.rs

//! Utility functions and helpers.

pub mod http;

use url::Url;

use crate::error::{AppError, Result};

/// Build the listing URL for a ranking page.
///
/// Page 1 is the bare listing URL; later pages carry a `page` query
/// parameter. An optional language filter becomes a trailing path segment.
pub fn page_url(base_url: &str, language: Option<&str>, page: u64) -> Result<String> {
    let mut url = Url::parse(base_url)?;

    if let Some(language) = language {
        url.path_segments_mut()
            .map_err(|_| AppError::config("base URL cannot take a language path segment"))?
            .pop_if_empty()
            .push(language);
    }

    if page > 1 {
        url.query_pairs_mut()
            .append_pair("page", &page.to_string());
    }

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://twitchtracker.com/channels/ranking/online_time";

    #[test]
    fn first_page_has_no_query() {
        assert_eq!(page_url(BASE, None, 1).unwrap(), BASE);
    }

    #[test]
    fn later_pages_carry_page_param() {
        assert_eq!(
            page_url(BASE, None, 3).unwrap(),
            format!("{BASE}?page=3")
        );
    }

    #[test]
    fn language_is_a_path_segment() {
        assert_eq!(
            page_url(BASE, Some("english"), 2).unwrap(),
            format!("{BASE}/english?page=2")
        );
    }

    #[test]
    fn rejects_unparseable_base() {
        assert!(page_url("not a url", None, 1).is_err());
    }
}
