//! HTML parsing and DOM navigation.
//!
//! This module provides the [`Document`] and [`Element`] types used by the
//! extractor. They are thin wrappers over `scraper` that add the handful of
//! navigation helpers slide extraction needs: descendant lookup that
//! excludes the element itself, and ancestor-or-self lookup.
//!
//! # Example
//!
//! ```rust
//! use itch_slides_core::parse::Document;
//!
//! let html = r#"<div class="game_cell"><a href="/exiled">Exiled</a></div>"#;
//! let doc = Document::parse(html);
//! let cells = doc.select(".game_cell").unwrap();
//! assert_eq!(cells.len(), 1);
//! ```

use scraper::{ElementRef, Html, Selector};

use crate::{Result, SlidesError};

/// Compiles a CSS selector, mapping failures to [`SlidesError::InvalidSelector`].
pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| SlidesError::InvalidSelector { selector: selector.to_string(), reason: e.to_string() })
}

/// A parsed HTML document.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses HTML from a string.
    ///
    /// Parsing never fails; malformed markup is repaired the way browsers do.
    pub fn parse(html: &str) -> Self {
        Self { html: Html::parse_document(html) }
    }

    /// Selects elements using a CSS selector string.
    ///
    /// # Errors
    ///
    /// Returns [`SlidesError::InvalidSelector`] if the selector is invalid.
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = parse_selector(selector)?;
        Ok(self.select_compiled(&sel))
    }

    /// Selects elements in document order using a compiled selector.
    pub fn select_compiled(&'_ self, selector: &Selector) -> Vec<Element<'_>> {
        self.html.select(selector).map(Element::new).collect()
    }
}

/// A single element of a [`Document`].
#[derive(Clone, Copy, Debug)]
pub struct Element<'a> {
    element: ElementRef<'a>,
}

impl<'a> Element<'a> {
    fn new(element: ElementRef<'a>) -> Self {
        Self { element }
    }

    /// Text content with surrounding whitespace trimmed.
    pub fn text(&self) -> String {
        self.element.text().collect::<String>().trim().to_string()
    }

    /// Gets the value of an attribute.
    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.element.value().attr(name)
    }

    /// Returns whether this element matches `selector`.
    pub fn matches(&self, selector: &Selector) -> bool {
        selector.matches(&self.element)
    }

    /// First descendant matching `selector`, in document order.
    ///
    /// The element itself is never returned, even if it matches.
    pub fn find(&self, selector: &Selector) -> Option<Element<'a>> {
        self.element
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
            .map(Element::new)
    }

    /// Nearest element matching `selector`, starting with the element itself
    /// and walking up through its ancestors.
    pub fn closest(&self, selector: &Selector) -> Option<Element<'a>> {
        if self.matches(selector) {
            return Some(*self);
        }

        self.element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| selector.matches(el))
            .map(Element::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
        <!DOCTYPE html>
        <html lang="en">
        <head><title> Ducky Dev - itch.io </title></head>
        <body>
            <div class="grid">
                <div class="game_cell" id="first">
                    <a href="/exiled" class="title">Exiled</a>
                    <div class="game_cell" id="nested"><span>inner</span></div>
                </div>
                <a href="/wrapper"><div class="game_cell" id="wrapped"><img src="t.png"></div></a>
            </div>
        </body>
        </html>
    "#;

    #[test]
    fn test_select_document_order() {
        let doc = Document::parse(SAMPLE_HTML);
        let cells = doc.select(".game_cell").unwrap();
        let ids: Vec<_> = cells.iter().filter_map(|c| c.attr("id")).collect();
        assert_eq!(ids, vec!["first", "nested", "wrapped"]);
    }

    #[test]
    fn test_invalid_selector() {
        let doc = Document::parse(SAMPLE_HTML);
        let result = doc.select("[[invalid");
        assert!(matches!(result, Err(SlidesError::InvalidSelector { .. })));
    }

    #[test]
    fn test_find_excludes_self() {
        let doc = Document::parse(SAMPLE_HTML);
        let cell = parse_selector(".game_cell").unwrap();
        let nested = doc.select("#nested").unwrap()[0];
        assert!(nested.find(&cell).is_none());

        let first = doc.select("#first").unwrap()[0];
        assert_eq!(first.find(&cell).and_then(|e| e.attr("id")), Some("nested"));
    }

    #[test]
    fn test_closest_walks_ancestors() {
        let doc = Document::parse(SAMPLE_HTML);
        let anchor = parse_selector("a").unwrap();
        let wrapped = doc.select("#wrapped").unwrap()[0];

        let link = wrapped.closest(&anchor).unwrap();
        assert_eq!(link.attr("href"), Some("/wrapper"));
    }

    #[test]
    fn test_closest_includes_self() {
        let doc = Document::parse(SAMPLE_HTML);
        let anchor = parse_selector("a").unwrap();
        let link = doc.select("a.title").unwrap()[0];
        assert_eq!(link.closest(&anchor).and_then(|e| e.attr("href")), Some("/exiled"));
    }

    #[test]
    fn test_text_is_trimmed() {
        let doc = Document::parse("<p>\n   Some text  \n</p>");
        let p = doc.select("p").unwrap()[0];
        assert_eq!(p.text(), "Some text");
    }
}
