use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};

/// Parse and percent-encode a URL so stray spaces, parentheses and
/// unicode in a hand-typed address still produce a valid request.
pub fn normalize_url(input: &str) -> Result<Url> {
    Url::parse(input.trim()).map_err(|source| Error::InvalidUrl {
        url: input.to_string(),
        source,
    })
}

/// Fetch an HTML page and return its body. Any non-2xx status is an error.
pub fn fetch_html(url: &Url, config: &Config) -> Result<String> {
    let client = Client::builder()
        .user_agent(config.user_agent())
        .redirect(Policy::limited(config.redirect_limit))
        .build()?;

    debug!(%url, "sending request");
    let resp = client.get(url.clone()).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::Status {
            url: url.to_string(),
            status,
        });
    }

    let text = resp.text()?;
    debug!(bytes = text.len(), "received body");
    Ok(text)
}
