//! Two one-shot test fixture generators:
//!
//! Article:  article_url
//! → normalize_url()
//! → fetch_html()
//! → extract_article()
//! → testdata/article.txt
//!
//! Treebank: testdata/tokenize.json
//! → sentences
//! → Penn Treebank words
//! → testdata/treebank_words.json + testdata/treebank_sents.json

pub mod article;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetcher;
pub mod fixtures;
pub mod tokenize;

pub use article::{generate_article, Article};
pub use config::Config;
pub use error::{Error, Result};
pub use tokenize::{generate_treebank, Treebank};

use tracing_subscriber::EnvFilter;

/// Log progress to stderr. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
