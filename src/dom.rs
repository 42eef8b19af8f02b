//! Typed element queries over a parsed HTML document.
//!
//! Extraction code describes what it is looking for with a [`Pattern`] and
//! walks [`Element`]s; the HTML parser underneath stays private to this
//! module.

use std::fmt;

use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// A tag name plus classes the element must all carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub tag: &'static str,
    pub classes: &'static [&'static str],
}

impl Pattern {
    pub const fn new(tag: &'static str, classes: &'static [&'static str]) -> Self {
        Pattern { tag, classes }
    }

    fn selector(&self) -> Result<Selector, ParseError> {
        let css = self.to_string();
        Selector::parse(&css).map_err(|_| ParseError::InvalidSelector(self.to_string()))
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag)?;
        for class in self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(source: &str) -> Self {
        Document {
            html: Html::parse_document(source),
        }
    }

    pub fn root(&self) -> Element<'_> {
        Element(self.html.root_element())
    }

    /// All matching elements anywhere in the document, in document order.
    pub fn find_all(&self, pattern: &Pattern) -> Result<Vec<Element<'_>>, ParseError> {
        self.root().find_all(pattern)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Element<'a>(ElementRef<'a>);

impl<'a> Element<'a> {
    /// Matching descendants in document order.
    pub fn find_all(&self, pattern: &Pattern) -> Result<Vec<Element<'a>>, ParseError> {
        let selector = pattern.selector()?;
        Ok(self.0.select(&selector).map(Element).collect())
    }

    /// First matching descendant.
    pub fn find(&self, pattern: &Pattern) -> Result<Option<Element<'a>>, ParseError> {
        let selector = pattern.selector()?;
        Ok(self.0.select(&selector).next().map(Element))
    }

    pub fn attr(&self, name: &str) -> Option<&'a str> {
        self.0.value().attr(name)
    }

    pub fn tag(&self) -> &'a str {
        self.0.value().name()
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text(&self) -> String {
        self.0.text().collect()
    }

    /// Short `tag#id` form used in error messages.
    pub fn describe(&self) -> String {
        match self.attr("id") {
            Some(id) => format!("{}#{id}", self.tag()),
            None => self.tag().to_string(),
        }
    }
}
