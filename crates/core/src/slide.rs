//! The slide record produced by extraction.

use serde::{Deserialize, Serialize};

/// Title used when no title source yields text.
pub const UNTITLED: &str = "Untitled";

/// One entry of the slideshow.
///
/// Serialized with camelCase keys. The short keys written by older
/// generators (`desc`, `img`, `url`) are accepted when reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRecord {
    /// Display name.
    pub title: String,

    /// Short text, may be empty.
    #[serde(default, alias = "desc")]
    pub description: String,

    /// Absolute thumbnail URL, or a placeholder, or `None`.
    #[serde(default, alias = "img")]
    pub image_url: Option<String>,

    /// Absolute URL the slide links to.
    #[serde(alias = "url")]
    pub link_url: String,
}

impl SlideRecord {
    pub fn new(
        title: impl Into<String>, description: impl Into<String>, image_url: Option<String>,
        link_url: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), description: description.into(), image_url, link_url: link_url.into() }
    }
}
