use crate::error::{Result, SlidesError};

/// CSS selectors tried in order until one matches (first match wins).
pub const DEFAULT_SELECTORS: &[&str] =
    &[".game_cell", ".project_cell", ".game_cell_wrapper", ".game-column", ".game_column"];

/// Patterns a hyperlink target must match to count as a game link.
pub const DEFAULT_LINK_PATTERNS: &[&str] = &[r"itch\.io", "/games/"];

pub const DEFAULT_TITLE_SELECTORS: &[&str] = &[".title"];

pub const DEFAULT_DESCRIPTION_SELECTORS: &[&str] = &[".description", ".game_text"];

/// Image attributes read in order; itch.io grids lazy-load via `data-lazy_src`.
pub const DEFAULT_IMAGE_ATTRIBUTES: &[&str] = &["src", "data-lazy_src"];

/// A single line of a selector chain file.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    /// Candidate node selector.
    Selector(String),
    /// Regex matched against resolved hyperlink targets in the link fallback.
    LinkPattern(String),
    /// Selector for the title child of a candidate.
    Title(String),
    /// Selector for the description child of a candidate.
    Description(String),
    /// Attribute holding an image source.
    ImageAttr(String),
}

/// The selector fallback chain, as plain data.
///
/// Every list is ordered. An empty list in a parsed file means "not
/// specified"; [`SelectorChain::overlay`] keeps the base list in that case.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectorChain {
    pub selectors: Vec<String>,
    pub link_patterns: Vec<String>,
    pub title_selectors: Vec<String>,
    pub description_selectors: Vec<String>,
    pub image_attributes: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl SelectorChain {
    /// Create an empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain matching the itch.io creator page themes.
    pub fn builtin() -> Self {
        Self {
            selectors: owned(DEFAULT_SELECTORS),
            link_patterns: owned(DEFAULT_LINK_PATTERNS),
            title_selectors: owned(DEFAULT_TITLE_SELECTORS),
            description_selectors: owned(DEFAULT_DESCRIPTION_SELECTORS),
            image_attributes: owned(DEFAULT_IMAGE_ATTRIBUTES),
        }
    }

    /// Add a directive to this chain
    pub fn add_directive(&mut self, directive: Directive) {
        match directive {
            Directive::Selector(css) => self.selectors.push(css),
            Directive::LinkPattern(pattern) => self.link_patterns.push(pattern),
            Directive::Title(css) => self.title_selectors.push(css),
            Directive::Description(css) => self.description_selectors.push(css),
            Directive::ImageAttr(name) => self.image_attributes.push(name),
        }
    }

    /// Replace each list of `self` with the matching list of `other` when
    /// `other` specifies it.
    pub fn overlay(mut self, other: &SelectorChain) -> Self {
        fn replace(base: &mut Vec<String>, top: &[String]) {
            if !top.is_empty() {
                *base = top.to_vec();
            }
        }

        replace(&mut self.selectors, &other.selectors);
        replace(&mut self.link_patterns, &other.link_patterns);
        replace(&mut self.title_selectors, &other.title_selectors);
        replace(&mut self.description_selectors, &other.description_selectors);
        replace(&mut self.image_attributes, &other.image_attributes);
        self
    }

    /// Check if no list is specified
    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
            && self.link_patterns.is_empty()
            && self.title_selectors.is_empty()
            && self.description_selectors.is_empty()
            && self.image_attributes.is_empty()
    }
}

/// Parse a directive line (`key: value`)
pub fn parse_directive(line: &str) -> Result<Directive> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Err(SlidesError::Config("Empty or comment line".to_string()));
    }

    let (key, value) = line
        .split_once(':')
        .ok_or_else(|| SlidesError::Config(format!("Missing ':' in directive: {}", line)))?;
    let key = key.trim();
    let value = value.trim();

    if value.is_empty() {
        return Err(SlidesError::Config(format!("Empty value for directive: {}", key)));
    }

    match key {
        "selector" => Ok(Directive::Selector(value.to_string())),
        "link_pattern" => Ok(Directive::LinkPattern(value.to_string())),
        "title" => Ok(Directive::Title(value.to_string())),
        "description" => Ok(Directive::Description(value.to_string())),
        "image_attr" => Ok(Directive::ImageAttr(value.to_string())),
        _ => Err(SlidesError::Config(format!("Unknown directive: {}", key))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_directive() {
        assert_eq!(
            parse_directive("selector: .game_cell").unwrap(),
            Directive::Selector(".game_cell".to_string())
        );
    }

    #[test]
    fn test_value_may_contain_colon() {
        assert_eq!(
            parse_directive("selector: a:not(.hidden)").unwrap(),
            Directive::Selector("a:not(.hidden)".to_string())
        );
    }

    #[test]
    fn test_unknown_directive() {
        assert!(parse_directive("body: //article").is_err());
    }

    #[test]
    fn test_missing_colon() {
        assert!(parse_directive("selector .game_cell").is_err());
    }

    #[test]
    fn test_empty_value() {
        assert!(parse_directive("title:").is_err());
    }

    #[test]
    fn test_add_directives_in_order() {
        let mut chain = SelectorChain::new();
        chain.add_directive(Directive::Selector(".a".to_string()));
        chain.add_directive(Directive::Selector(".b".to_string()));
        chain.add_directive(Directive::ImageAttr("data-src".to_string()));

        assert_eq!(chain.selectors, vec![".a", ".b"]);
        assert_eq!(chain.image_attributes, vec!["data-src"]);
    }

    #[test]
    fn test_overlay_replaces_only_specified_lists() {
        let mut custom = SelectorChain::new();
        custom.add_directive(Directive::Selector(".grid_item".to_string()));

        let merged = SelectorChain::builtin().overlay(&custom);
        assert_eq!(merged.selectors, vec![".grid_item"]);
        assert_eq!(merged.title_selectors, owned(DEFAULT_TITLE_SELECTORS));
        assert_eq!(merged.link_patterns, owned(DEFAULT_LINK_PATTERNS));
    }

    #[test]
    fn test_builtin_primary_selector_is_game_cell() {
        let chain = SelectorChain::builtin();
        assert_eq!(chain.selectors[0], ".game_cell");
        assert!(!chain.is_empty());
        assert!(SelectorChain::new().is_empty());
    }
}
