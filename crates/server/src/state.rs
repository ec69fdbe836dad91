use std::sync::Arc;

use anyhow::{Context, Result};
use itch_slides_core::{ChainLoader, ExtractConfig, Extractor, FetchConfig};

use crate::config::Config;

/// Shared application state
///
/// Immutable after startup; every request works on its own fetched page.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<Extractor>,
    pub fetch: FetchConfig,
    pub default_url: String,
    pub allowed_domain: String,
}

impl AppState {
    pub fn new(extractor: Extractor, fetch: FetchConfig, default_url: String, allowed_domain: String) -> Self {
        Self { extractor: Arc::new(extractor), fetch, default_url, allowed_domain }
    }

    /// Load the selector chain and compile the extractor
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut loader = ChainLoader::default();
        if let Some(path) = &config.selectors {
            loader = loader.explicit(path);
        }

        if let Some(path) = loader.source_path() {
            tracing::info!(path = %path.display(), "Loading selector chain");
        }

        let chain = loader.load().context("Failed to load selector chain")?;
        let extract = ExtractConfig::builder().max_count(config.max_slides).chain(chain).build();
        let extractor = Extractor::new(&extract).context("Invalid selector chain")?;

        let fetch = FetchConfig { timeout: config.fetch_timeout, ..Default::default() };

        Ok(Self::new(extractor, fetch, config.default_url.clone(), config.allowed_domain.clone()))
    }
}
