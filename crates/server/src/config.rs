use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use itch_slides_core::{DEFAULT_CREATOR_URL, DEFAULT_MAX_SLIDES};

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Creator page used when a request has no `url` parameter
    pub default_url: String,
    /// Requested hosts must equal this domain or be a subdomain of it
    pub allowed_domain: String,
    pub max_slides: usize,
    /// Selector chain file; the user config dir and built-in chain otherwise
    pub selectors: Option<PathBuf>,
    /// Directory served for every path that is not an API route
    pub static_dir: PathBuf,
    /// Upstream fetch timeout in seconds
    pub fetch_timeout: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            default_url: env::var("SLIDES_DEFAULT_URL").unwrap_or_else(|_| DEFAULT_CREATOR_URL.to_string()),
            allowed_domain: env::var("SLIDES_ALLOWED_DOMAIN").unwrap_or_else(|_| "itch.io".to_string()),
            max_slides: match env::var("SLIDES_MAX") {
                Ok(value) => value.parse().context("SLIDES_MAX must be a valid number")?,
                Err(_) => DEFAULT_MAX_SLIDES,
            },
            selectors: env::var("SLIDES_SELECTORS").ok().map(PathBuf::from),
            static_dir: env::var("STATIC_DIR").map(PathBuf::from).unwrap_or_else(|_| PathBuf::from(".")),
            fetch_timeout: env::var("FETCH_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .context("FETCH_TIMEOUT must be a valid number")?,
        })
    }

    /// Whole-request timeout; leaves headroom over the upstream fetch.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout + 5)
    }
}
