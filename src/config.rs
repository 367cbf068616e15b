use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

pub const DEFAULT_CONFIG_PATH: &str = "fixturegen.toml";
pub const DEFAULT_TESTDATA_DIR: &str = "testdata";
pub const DEFAULT_ARTICLE_URL: &str =
    "http://fox13now.com/2013/12/30/new-year-new-laws-obamacare-pot-guns-and-drones/";

pub const ARTICLE_FILE: &str = "article.txt";
pub const TOKENIZE_INPUT_FILE: &str = "tokenize.json";
pub const TREEBANK_WORDS_FILE: &str = "treebank_words.json";
pub const TREEBANK_SENTS_FILE: &str = "treebank_sents.json";

/// Settings shared by both fixture generators.
///
/// Every field has a default, so an absent `fixturegen.toml` (the usual case)
/// leaves the generators writing to `testdata/` and fetching the stock article.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub testdata_dir: PathBuf,
    pub article_url: String,
    pub user_agent: Option<String>,
    pub redirect_limit: usize,
    pub max_elements_to_parse: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            testdata_dir: PathBuf::from(DEFAULT_TESTDATA_DIR),
            article_url: DEFAULT_ARTICLE_URL.to_string(),
            user_agent: None,
            redirect_limit: 10,
            max_elements_to_parse: 9000,
        }
    }
}

impl Config {
    pub fn user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }

    pub fn article_path(&self) -> PathBuf {
        self.testdata_dir.join(ARTICLE_FILE)
    }

    pub fn tokenize_input_path(&self) -> PathBuf {
        self.testdata_dir.join(TOKENIZE_INPUT_FILE)
    }

    pub fn treebank_words_path(&self) -> PathBuf {
        self.testdata_dir.join(TREEBANK_WORDS_FILE)
    }

    pub fn treebank_sents_path(&self) -> PathBuf {
        self.testdata_dir.join(TREEBANK_SENTS_FILE)
    }

    /// Load the config file named by `overrides` (or the default one) and
    /// apply the command-line overrides on top.
    pub fn resolve(overrides: &Overrides) -> Result<Config> {
        let path = overrides
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        let mut config = load_config_from_path(&path)?.unwrap_or_default();
        if let Some(dir) = &overrides.testdata_dir {
            config.testdata_dir = dir.clone();
        }
        if let Some(url) = &overrides.article_url {
            config.article_url = url.clone();
        }
        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!(
        "fixturegen/{} (rust; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS
    )
}

/// Read a TOML config. A missing file is not an error.
pub fn load_config_from_path(path: &Path) -> Result<Option<Config>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(Error::io(path, e)),
    };

    let config = toml::from_str(&content).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(config))
}

/// Command-line overrides accepted by the generator binaries.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub config_path: Option<PathBuf>,
    pub testdata_dir: Option<PathBuf>,
    pub article_url: Option<String>,
}

/// Parse generator arguments. `--url` is only accepted when `allow_url` is set.
pub fn parse_args<I>(args: I, allow_url: bool) -> std::result::Result<Overrides, String>
where
    I: IntoIterator<Item = String>,
{
    let mut overrides = Overrides::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        if arg == "--config" {
            let value = args.next().ok_or("--config requires a path")?;
            overrides.config_path = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--config=") {
            overrides.config_path = Some(PathBuf::from(value));
        } else if arg == "--testdata" {
            let value = args.next().ok_or("--testdata requires a directory")?;
            overrides.testdata_dir = Some(PathBuf::from(value));
        } else if let Some(value) = arg.strip_prefix("--testdata=") {
            overrides.testdata_dir = Some(PathBuf::from(value));
        } else if allow_url && arg == "--url" {
            let value = args.next().ok_or("--url requires a URL")?;
            overrides.article_url = Some(value);
        } else if let Some(value) = arg.strip_prefix("--url=").filter(|_| allow_url) {
            overrides.article_url = Some(value.to_string());
        } else {
            return Err(format!("unexpected argument: {}", arg));
        }
    }

    Ok(overrides)
}
