use dom_smoothie::{Article, Config as ReadabilityConfig, Readability, TextMode};

use crate::config::Config;
use crate::error::{Error, Result};

/// Pick the main article out of a page with dom_smoothie's Readability port,
/// in formatted-text mode and capped at `config.max_elements_to_parse`.
/// Parser and extraction failures both surface as `Error::Extraction`.
pub fn extract_article(html: &str, url: Option<&str>, config: &Config) -> Result<Article> {
    let cfg = ReadabilityConfig {
        max_elements_to_parse: config.max_elements_to_parse,
        text_mode: TextMode::Formatted,
        ..Default::default()
    };

    let failed = |reason: String| Error::Extraction {
        url: url.unwrap_or("<inline html>").to_string(),
        reason,
    };

    let mut readability =
        Readability::new(html, url, Some(cfg)).map_err(|e| failed(e.to_string()))?;
    readability.parse().map_err(|e| failed(e.to_string()))
}
