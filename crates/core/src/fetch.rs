//! Content fetching from URLs, files, and stdin.
//!
//! The URL fetcher is a stateless, single-shot proxy: it validates the URL,
//! issues exactly one GET request with an identifying User-Agent and a
//! bounded timeout, and returns the body text. No caching, no retries.

use std::fs;
use std::path::PathBuf;

use crate::{MdconvError, Result};

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

/// HTTP client configuration for fetching remote content.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Identifying User-Agent string sent with every request.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: 10, user_agent: "mdconv/1.0 (+https://github.com/mdconv/mdconv)".to_string() }
    }
}

/// Fetches the body of a URL as text.
///
/// Validates that the input parses as a URL and carries an `http` or
/// `https` scheme before any request is issued. Exceeding the configured
/// timeout yields [`MdconvError::Timeout`]; a non-success upstream status
/// yields [`MdconvError::Upstream`] with the status code and its reason.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| MdconvError::InvalidUrl(e.to_string()))?;

    match parsed_url.scheme() {
        "http" | "https" => {}
        other => return Err(MdconvError::UnsupportedScheme(other.to_string())),
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(MdconvError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                MdconvError::Timeout { timeout: config.timeout }
            } else {
                MdconvError::HttpError(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(MdconvError::Upstream {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
        });
    }

    let content = response.text().await.map_err(|e| {
        if e.is_timeout() {
            MdconvError::Timeout { timeout: config.timeout }
        } else {
            MdconvError::HttpError(e)
        }
    })?;

    Ok(content)
}

/// Reads content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(MdconvError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(MdconvError::from)
    }
}

/// Reads content from standard input until EOF.
///
/// Useful for piping content from other commands.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(MdconvError::from)?;

    Ok(buffer)
}
