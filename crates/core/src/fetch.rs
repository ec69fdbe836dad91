//! Content fetching from URLs, files, and stdin.
//!
//! The network fetch of the source page is the only suspension point in the
//! whole pipeline; everything after it is synchronous.

use std::fs;
use std::path::PathBuf;

#[cfg(feature = "fetch")]
use std::time::Duration;

#[cfg(feature = "fetch")]
use reqwest::Client;
#[cfg(feature = "fetch")]
use url::Url;

#[cfg(feature = "fetch")]
use crate::extract::{ExtractedSlides, Extractor};
use crate::{Result, SlidesError};

/// Creator page used when no URL is given.
pub const DEFAULT_CREATOR_URL: &str = "https://ducky-dev.itch.io";

/// HTTP client configuration for fetching creator pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: 30,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (compatible; itch-slides/1.0)"
                .to_string(),
        }
    }
}

/// Fetches HTML content from a URL.
///
/// Follows redirects and fails with [`SlidesError::HttpStatus`] when the
/// final response is not a success.
#[cfg(feature = "fetch")]
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| SlidesError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(SlidesError::InvalidUrl(
            "URL must use http:// or https://".to_string(),
        ));
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SlidesError::Fetch)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                SlidesError::Timeout { timeout: config.timeout }
            } else {
                SlidesError::Fetch(e)
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SlidesError::HttpStatus { status: status.as_u16() });
    }

    let content = response.text().await?;

    Ok(content)
}

/// Fetches a creator page and extracts slides from it, using the page URL as
/// the resolution base.
#[cfg(feature = "fetch")]
pub async fn fetch_slides(url: &str, fetch: &FetchConfig, extractor: &Extractor) -> Result<ExtractedSlides> {
    let html = fetch_url(url, fetch).await?;
    extractor.extract(&html, url)
}

/// Reads HTML content from a local file.
///
/// Callers should validate and sanitize the path when accepting user input.
pub fn fetch_file(path: &str) -> Result<String> {
    let path_buf = PathBuf::from(path);

    if !path_buf.exists() {
        Err(SlidesError::FileNotFound(path_buf))
    } else {
        fs::read_to_string(&path_buf).map_err(SlidesError::from)
    }
}

/// Reads HTML content from standard input until EOF.
pub fn fetch_stdin() -> Result<String> {
    use std::io::{self, Read};

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(SlidesError::from)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "fetch")]
    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Runtime::new().unwrap().block_on(future)
    }

    #[test]
    fn test_fetch_config_default() {
        let config = FetchConfig::default();
        assert_eq!(config.timeout, 30);
        assert!(config.user_agent.contains("Mozilla"));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_invalid() {
        let config = FetchConfig::default();
        let result = block_on(fetch_url("not-a-url", &config));
        assert!(matches!(result, Err(SlidesError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_rejects_other_schemes() {
        let config = FetchConfig::default();
        let result = block_on(fetch_url("ftp://example.itch.io/", &config));
        assert!(matches!(result, Err(SlidesError::InvalidUrl(_))));
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_url_connection_refused_is_fetch_error() {
        let config = FetchConfig { timeout: 5, ..Default::default() };
        let result = block_on(fetch_url("http://127.0.0.1:1/", &config));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Fetch);
    }

    #[test]
    fn test_fetch_file_not_found() {
        let result = fetch_file("/nonexistent/path/file.html");
        assert!(matches!(result, Err(SlidesError::FileNotFound(_))));
    }

    #[test]
    fn test_fetch_file_reads_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.html");
        std::fs::write(&path, "<p>hi</p>").unwrap();

        let content = fetch_file(path.to_str().unwrap()).unwrap();
        assert_eq!(content, "<p>hi</p>");
    }
}
