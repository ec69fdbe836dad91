//! Page-to-slides extraction.
//!
//! Turns a creator page's markup into an ordered list of [`SlideRecord`]s:
//!
//! 1. try each chain selector in order; the first one that matches any node
//!    wins and later selectors are not evaluated
//! 2. otherwise keep hyperlinks whose resolved target matches a link pattern
//! 3. truncate to `max_count` and map every node to a record
//! 4. drop records without a link
//!
//! All relative URLs are resolved against the caller-supplied base URL,
//! since markup is usually parsed away from its original host.

use url::{Position, Url};

use crate::chain::{CompiledChain, SelectorChain};
use crate::parse::{Document, Element};
use crate::slide::{SlideRecord, UNTITLED};
use crate::{Result, SlidesError};

/// Default number of slides the server and embedded variants return.
pub const DEFAULT_MAX_SLIDES: usize = 12;

/// Image shown by the embedded slideshow when a game has no thumbnail.
pub const PLACEHOLDER_IMAGE: &str = "BG.jpg";

/// Which part of the chain produced the candidate nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchSource {
    /// A chain selector matched.
    Selector(String),
    /// No selector matched; game-looking hyperlinks were used.
    LinkFallback,
}

impl std::fmt::Display for MatchSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchSource::Selector(css) => write!(f, "selector {}", css),
            MatchSource::LinkFallback => write!(f, "game link fallback"),
        }
    }
}

/// Slides plus diagnostics about how they were found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSlides {
    /// Records in document order.
    pub slides: Vec<SlideRecord>,
    /// What matched.
    pub source: MatchSource,
    /// Number of candidate nodes before truncation.
    pub candidate_count: usize,
}

/// Configuration for extraction.
///
/// # Example
///
/// ```rust
/// use itch_slides_core::ExtractConfig;
///
/// let config = ExtractConfig::builder()
///     .max_count(24)
///     .placeholder_image("BG.jpg")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ExtractConfig {
    /// Maximum number of records returned (default: 12).
    pub max_count: usize,

    /// Selector fallback chain (default: [`SelectorChain::builtin`]).
    pub chain: SelectorChain,

    /// Image URL used when a node has no image; `None` leaves `image_url` empty.
    pub placeholder_image: Option<String>,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { max_count: DEFAULT_MAX_SLIDES, chain: SelectorChain::builtin(), placeholder_image: None }
    }
}

impl ExtractConfig {
    /// Creates a new builder for ExtractConfig.
    pub fn builder() -> ExtractConfigBuilder {
        ExtractConfigBuilder::new()
    }
}

/// Builder for ExtractConfig.
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ExtractConfig::default() }
    }

    /// Sets the maximum number of records.
    pub fn max_count(mut self, value: usize) -> Self {
        self.config.max_count = value;
        self
    }

    /// Sets the selector chain.
    pub fn chain(mut self, chain: SelectorChain) -> Self {
        self.config.chain = chain;
        self
    }

    /// Sets the placeholder image.
    pub fn placeholder_image(mut self, value: impl Into<String>) -> Self {
        self.config.placeholder_image = Some(value.into());
        self
    }

    /// Builds the config.
    pub fn build(self) -> ExtractConfig {
        self.config
    }
}

impl Default for ExtractConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reusable extractor holding a compiled chain.
///
/// Build one per configuration and share it; extraction itself keeps no
/// state between calls.
#[derive(Debug, Clone)]
pub struct Extractor {
    chain: CompiledChain,
    max_count: usize,
    placeholder_image: Option<String>,
}

impl Extractor {
    /// Compiles the configured chain.
    pub fn new(config: &ExtractConfig) -> Result<Self> {
        Ok(Self {
            chain: config.chain.compile()?,
            max_count: config.max_count,
            placeholder_image: config.placeholder_image.clone(),
        })
    }

    /// Extracts slides from raw markup.
    ///
    /// # Errors
    ///
    /// [`SlidesError::Extraction`] when no candidate nodes are found, or when
    /// every candidate lacks a link.
    pub fn extract(&self, markup: &str, base_url: &str) -> Result<ExtractedSlides> {
        let doc = Document::parse(markup);
        self.extract_document(&doc, base_url)
    }

    /// Extracts slides from an already parsed document.
    pub fn extract_document(&self, doc: &Document, base_url: &str) -> Result<ExtractedSlides> {
        let resolver = Resolver::new(base_url);
        let (source, candidates) = self.find_candidates(doc, &resolver);

        if candidates.is_empty() {
            return Err(SlidesError::Extraction("no slides found".to_string()));
        }

        let candidate_count = candidates.len();
        let slides: Vec<SlideRecord> = candidates
            .iter()
            .take(self.max_count)
            .map(|node| self.to_record(node, &resolver))
            .filter(|slide| !slide.link_url.is_empty())
            .collect();

        if slides.is_empty() && self.max_count > 0 {
            return Err(SlidesError::Extraction("no usable slides".to_string()));
        }

        Ok(ExtractedSlides { slides, source, candidate_count })
    }

    fn find_candidates<'a>(&self, doc: &'a Document, resolver: &Resolver) -> (MatchSource, Vec<Element<'a>>) {
        for (css, selector) in &self.chain.selectors {
            let found = doc.select_compiled(selector);
            if !found.is_empty() {
                return (MatchSource::Selector(css.clone()), found);
            }
        }

        let links = doc
            .select_compiled(&self.chain.anchor)
            .into_iter()
            .filter(|a| {
                a.attr("href").and_then(|href| resolver.match_target(href)).is_some_and(|target| {
                    self.chain.link_patterns.iter().any(|pattern| pattern.is_match(&target))
                })
            })
            .collect();

        (MatchSource::LinkFallback, links)
    }

    fn to_record(&self, node: &Element<'_>, resolver: &Resolver) -> SlideRecord {
        let anchor = node.find(&self.chain.anchor).or_else(|| node.closest(&self.chain.anchor));

        let link_url = match anchor {
            Some(a) => a.attr("href").map(|href| resolver.resolve(href)).unwrap_or_default(),
            None => resolver.base_str().to_string(),
        };

        let image_url = node
            .find(&self.chain.image)
            .and_then(|img| {
                self.chain
                    .image_attributes
                    .iter()
                    .filter_map(|name| img.attr(name))
                    .map(str::trim)
                    .find(|src| !src.is_empty())
            })
            .map(|src| resolver.resolve(src))
            .or_else(|| self.placeholder_image.clone());

        let title = first_text(node, &self.chain.title)
            .or_else(|| anchor.and_then(|a| a.attr("title")).map(str::trim).filter(|t| !t.is_empty()).map(String::from))
            .or_else(|| anchor.map(|a| a.text()).filter(|t| !t.is_empty()))
            .unwrap_or_else(|| UNTITLED.to_string());

        let description = first_text(node, &self.chain.description).unwrap_or_default();

        SlideRecord { title, description, image_url, link_url }
    }
}

/// Text of the first descendant matching one of `selectors`, skipping
/// matches whose text is empty.
fn first_text(node: &Element<'_>, selectors: &[scraper::Selector]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|sel| node.find(sel))
        .map(|el| el.text())
        .find(|text| !text.is_empty())
}

/// Resolves references against the page URL, keeping the raw string when
/// either side does not parse.
struct Resolver<'a> {
    raw: &'a str,
    base: Option<Url>,
}

impl<'a> Resolver<'a> {
    fn new(raw: &'a str) -> Self {
        Self { raw, base: Url::parse(raw).ok() }
    }

    fn base_str(&self) -> &str {
        self.raw
    }

    /// Text a link pattern is tested against.
    ///
    /// Absolute references are matched as written; relative ones by the
    /// path of their resolved target, so the page's own host never counts.
    /// Fragment-only references and links back to the page yield `None`.
    fn match_target(&self, reference: &str) -> Option<String> {
        let reference = reference.trim();
        if reference.is_empty() || reference.starts_with('#') {
            return None;
        }

        let (target, absolute) = match Url::parse(reference) {
            Ok(url) => (url, true),
            Err(_) => match self.base.as_ref().and_then(|base| base.join(reference).ok()) {
                Some(url) => (url, false),
                None => return Some(reference.to_string()),
            },
        };

        let same_page = self
            .base
            .as_ref()
            .is_some_and(|base| base[..Position::AfterQuery] == target[..Position::AfterQuery]);
        if same_page {
            return None;
        }

        if absolute { Some(reference.to_string()) } else { Some(target[Position::BeforePath..].to_string()) }
    }

    fn resolve(&self, reference: &str) -> String {
        self.base
            .as_ref()
            .and_then(|base| base.join(reference).ok())
            .map(String::from)
            .unwrap_or_else(|| reference.to_string())
    }
}

/// Extracts slides with the given configuration.
///
/// Compiles the chain on every call; reuse an [`Extractor`] when extracting
/// repeatedly.
pub fn extract_slides(markup: &str, base_url: &str, config: &ExtractConfig) -> Result<Vec<SlideRecord>> {
    Ok(Extractor::new(config)?.extract(markup, base_url)?.slides)
}

/// Extracts slides using the built-in chain and at most `max_count` records.
pub fn extract_with_limit(markup: &str, base_url: &str, max_count: usize) -> Result<Vec<SlideRecord>> {
    let config = ExtractConfig::builder().max_count(max_count).build();
    extract_slides(markup, base_url, &config)
}
