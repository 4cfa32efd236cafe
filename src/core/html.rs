// src/core/html.rs
//! Thin adapter over `scraper::Html`.
//!
//! Three primitives are all the extractors need:
//! - [`Document::find_all`]: elements by tag name, in document order
//! - [`text_of`]: concatenated text of an element, untrimmed
//! - [`Document::preceding`]: elements that open before a given one, nearest first
//!
//! "Preceding" means document order, so ancestors count (a wrapping `<div>` opens
//! before the table inside it), as do the descendants of earlier siblings.

use std::iter;

use scraper::{ElementRef, Html};

pub struct Document {
    html: Html,
}

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self { html: Html::parse_document(markup) }
    }

    /// Every element in document (pre-)order.
    fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.html.root_element().descendants().filter_map(ElementRef::wrap)
    }

    pub fn find_all(&self, tags: &[&str]) -> Vec<ElementRef<'_>> {
        self.elements().filter(|el| has_tag(el, tags)).collect()
    }

    /// Elements matching `tags` that open before `el`, nearest first.
    /// Walks document order backwards: previous sibling's deepest last
    /// descendant, or the parent when there is no previous sibling.
    pub fn preceding<'a>(
        &'a self,
        el: ElementRef<'a>,
        tags: &'a [&'a str],
    ) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        iter::successors(Some(*el), |node| match node.prev_sibling() {
            Some(mut prev) => {
                while let Some(last) = prev.last_child() {
                    prev = last;
                }
                Some(prev)
            }
            None => node.parent(),
        })
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(move |e| has_tag(e, tags))
    }
}

/// Tag-filtered descendants of `el` (excluding `el` itself), in document order.
pub fn descendants_by_tag<'a>(el: ElementRef<'a>, tags: &[&str]) -> Vec<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .filter(|e| has_tag(e, tags))
        .collect()
}

/// All text nodes under `el`, concatenated as-is.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

fn has_tag(el: &ElementRef<'_>, tags: &[&str]) -> bool {
    let name = el.value().name();
    tags.iter().any(|t| t.eq_ignore_ascii_case(name))
}

/* ---------------- Table helpers ---------------- */

/// Rows of a table, nested tables included (matches how the pages are scanned).
pub fn rows_of(table: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    descendants_by_tag(table, &["tr"])
}

pub fn cells_of(row: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    descendants_by_tag(row, &["td", "th"])
}
