pub mod json;
pub mod toml;

pub use json::{JsonConfig, load_slides_json, parse_slides_json, slides_to_json};
pub use toml::slides_to_toml;

use std::str::FromStr;

use crate::{Result, SlideRecord};

/// Output format for a slides file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Toml,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(format!("Invalid format: {}. Valid options: json, toml", s)),
        }
    }
}

/// Render slides in `format`; `pretty` only affects JSON.
pub fn render(slides: &[SlideRecord], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json => slides_to_json(slides, &JsonConfig { pretty }),
        OutputFormat::Toml => Ok(slides_to_toml(slides)),
    }
}
