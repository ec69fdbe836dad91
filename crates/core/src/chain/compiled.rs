use regex::Regex;
use scraper::Selector;

use crate::chain::directives::SelectorChain;
use crate::error::{Result, SlidesError};
use crate::parse::parse_selector;

/// A [`SelectorChain`] with every selector and pattern validated and
/// compiled.
#[derive(Debug, Clone)]
pub struct CompiledChain {
    pub(crate) selectors: Vec<(String, Selector)>,
    pub(crate) link_patterns: Vec<Regex>,
    pub(crate) title: Vec<Selector>,
    pub(crate) description: Vec<Selector>,
    pub(crate) image_attributes: Vec<String>,
    pub(crate) anchor: Selector,
    pub(crate) image: Selector,
}

impl CompiledChain {
    /// Selector strings in evaluation order.
    pub fn selector_names(&self) -> impl Iterator<Item = &str> {
        self.selectors.iter().map(|(name, _)| name.as_str())
    }
}

impl SelectorChain {
    /// Compile every selector and pattern.
    ///
    /// # Errors
    ///
    /// [`SlidesError::InvalidSelector`] or [`SlidesError::InvalidPattern`]
    /// for the first entry that does not compile.
    pub fn compile(&self) -> Result<CompiledChain> {
        let selectors = self
            .selectors
            .iter()
            .map(|css| parse_selector(css).map(|sel| (css.clone(), sel)))
            .collect::<Result<Vec<_>>>()?;

        let link_patterns = self
            .link_patterns
            .iter()
            .map(|pattern| {
                Regex::new(pattern)
                    .map_err(|e| SlidesError::InvalidPattern { pattern: pattern.clone(), reason: e.to_string() })
            })
            .collect::<Result<Vec<_>>>()?;

        let title = self.title_selectors.iter().map(|css| parse_selector(css)).collect::<Result<Vec<_>>>()?;
        let description = self
            .description_selectors
            .iter()
            .map(|css| parse_selector(css))
            .collect::<Result<Vec<_>>>()?;

        Ok(CompiledChain {
            selectors,
            link_patterns,
            title,
            description,
            image_attributes: self.image_attributes.clone(),
            anchor: parse_selector("a")?,
            image: parse_selector("img")?,
        })
    }
}
