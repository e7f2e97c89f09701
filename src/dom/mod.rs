//! Detached HTML snapshots queried through [`Locator`] chains.
//!
//! A [`Document`] owns its parsed tree and has no link back to the page it was
//! captured from; later changes to the live page never show up in it.

mod locator;
mod text;

use std::collections::HashSet;

use scraper::{ElementRef, Html, Selector};

pub use locator::Locator;
pub use text::{joined_text, visible_text};

use crate::error::{Result, ScrapeError};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parse a captured markup snippet as a standalone fragment.
    pub fn parse_fragment(markup: &str) -> Self {
        Self {
            html: Html::parse_fragment(markup),
        }
    }

    /// Every element the locator matches, in document order.
    pub fn resolve(&self, locator: &Locator) -> Result<Vec<ElementRef<'_>>> {
        let mut current = vec![self.html.root_element()];
        for (raw, index) in locator.steps() {
            let selector = compile(raw)?;
            let mut seen = HashSet::new();
            let mut matched: Vec<ElementRef<'_>> = current
                .iter()
                .flat_map(|scope| scope.select(&selector))
                .filter(|el| seen.insert(el.id()))
                .collect();
            if let Some(index) = index {
                matched = matched.into_iter().nth(index).into_iter().collect();
            }
            if matched.is_empty() {
                return Ok(matched);
            }
            current = matched;
        }
        Ok(current)
    }

    fn first(&self, locator: &Locator) -> Result<Option<ElementRef<'_>>> {
        Ok(self.resolve(locator)?.into_iter().next())
    }

    pub fn count(&self, locator: &Locator) -> Result<usize> {
        Ok(self.resolve(locator)?.len())
    }

    pub fn inner_text(&self, locator: &Locator) -> Result<Option<String>> {
        Ok(self.first(locator)?.map(visible_text))
    }

    pub fn joined_text(&self, locator: &Locator, separator: &str) -> Result<Option<String>> {
        Ok(self.first(locator)?.map(|el| joined_text(el, separator)))
    }

    /// Raw `textContent` of every match.
    pub fn text_contents(&self, locator: &Locator) -> Result<Vec<String>> {
        Ok(self
            .resolve(locator)?
            .into_iter()
            .map(|el| el.text().collect::<String>())
            .collect())
    }

    pub fn attribute(&self, locator: &Locator, name: &str) -> Result<Option<String>> {
        Ok(self
            .first(locator)?
            .and_then(|el| el.value().attr(name).map(String::from)))
    }

    pub fn outer_html(&self, locator: &Locator) -> Result<Option<String>> {
        Ok(self.first(locator)?.map(|el| el.html()))
    }

    /// `None` when nothing matches; otherwise whether the first match lacks `disabled`.
    pub fn is_enabled(&self, locator: &Locator) -> Result<Option<bool>> {
        Ok(self
            .first(locator)?
            .map(|el| el.value().attr("disabled").is_none()))
    }

    /// Visible text of `<body>`, or of the whole tree for body-less fragments.
    pub fn body_text(&self) -> String {
        Selector::parse("body")
            .ok()
            .and_then(|sel| self.html.select(&sel).next())
            .map_or_else(|| visible_text(self.html.root_element()), visible_text)
    }
}

fn compile(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}
