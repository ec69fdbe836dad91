use crate::{Result, SlideRecord, SlidesError};
use std::path::Path;

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct JsonConfig {
    /// Pretty print JSON output (default: true)
    pub pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Convert slides to a JSON array
pub fn slides_to_json(slides: &[SlideRecord], config: &JsonConfig) -> Result<String> {
    if config.pretty {
        Ok(serde_json::to_string_pretty(slides)?)
    } else {
        Ok(serde_json::to_string(slides)?)
    }
}

/// Parse a JSON array of slides.
///
/// Accepts both the current camelCase keys and the legacy `desc`/`img`/`url`
/// keys.
pub fn parse_slides_json(content: &str) -> Result<Vec<SlideRecord>> {
    Ok(serde_json::from_str(content)?)
}

/// Read a slides file written by the generator
pub fn load_slides_json<P: AsRef<Path>>(path: P) -> Result<Vec<SlideRecord>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(SlidesError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    parse_slides_json(&content)
}
