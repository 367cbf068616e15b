use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::{extractor, fetcher};

/// The readable body of one web page.
#[derive(Debug, Clone)]
pub struct Article {
    pub url: Url,
    pub title: String,
    pub text: String,
}

impl Article {
    /// Download `config.article_url` and extract its article text.
    pub fn download(config: &Config) -> Result<Article> {
        let url = fetcher::normalize_url(&config.article_url)?;

        info!(%url, "fetching article");
        let html = fetcher::fetch_html(&url, config)?;

        Article::from_html(url, &html, config)
    }

    /// Extract the article from already-fetched HTML. The raw markup is not kept.
    pub fn from_html(url: Url, html: &str, config: &Config) -> Result<Article> {
        let parsed = extractor::extract_article(html, Some(url.as_str()), config)?;

        let text = tidy_text(&parsed.text_content);
        if text.is_empty() {
            return Err(Error::Extraction {
                url: url.to_string(),
                reason: "no article text found".to_string(),
            });
        }

        debug!(title = %parsed.title, chars = text.chars().count(), "extracted article");
        Ok(Article {
            url,
            title: parsed.title,
            text,
        })
    }

    /// Overwrite `path` with the article text.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, &self.text).map_err(|e| Error::io(path, e))
    }
}

/// Strip trailing whitespace from every line, squeeze runs of blank lines
/// down to one, and trim the whole body.
fn tidy_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut blank_run = false;

    for line in raw.lines().map(str::trim_end) {
        if line.trim().is_empty() {
            blank_run = !out.is_empty();
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
            if blank_run {
                out.push('\n');
            }
        }
        if out.is_empty() {
            out.push_str(line.trim_start());
        } else {
            out.push_str(line);
        }
        blank_run = false;
    }

    out
}

/// Fetch the configured article and write its text to `config.article_path()`.
pub fn generate_article(config: &Config) -> Result<PathBuf> {
    let article = Article::download(config)?;
    let path = config.article_path();
    article.write_to(&path)?;
    info!(title = %article.title, path = %path.display(), "wrote article");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tidy_collapses_blank_runs() {
        let raw = "\n\n  First paragraph.  \n\n\n\nSecond line\nthird line \n\n";
        assert_eq!(
            tidy_text(raw),
            "First paragraph.\n\nSecond line\nthird line"
        );
    }

    #[test]
    fn tidy_of_whitespace_is_empty() {
        assert_eq!(tidy_text(" \n\t\n "), "");
    }
}
