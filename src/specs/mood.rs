// src/specs/mood.rs
//! Mood context for a table: scan the elements opening before it, nearest
//! first, and take the first one whose text names a mood.

use scraper::ElementRef;

use crate::config::consts::{CONTEXT_LOOKBACK, HEADING_TAGS, STANDARD_CONTEXT_TAGS};
use crate::core::html::{text_of, Document};
use crate::data::Mood;

/// Mood named by a block of text. Keywords are checked in [`Mood::PRIORITY`] order,
/// so "indicatif … subjonctif" in the same text is indicatif.
pub fn classify(text: &str) -> Option<Mood> {
    let lc = text.to_lowercase();
    Mood::PRIORITY.into_iter().find(|m| lc.contains(m.as_str()))
}

/// Headings plus paragraph/div text. Used by the standard extractor.
pub fn resolve(doc: &Document, table: ElementRef<'_>) -> Option<Mood> {
    resolve_within(doc, table, &STANDARD_CONTEXT_TAGS)
}

/// Headings (h2–h4) only. Used for pronominal paradigm tables.
pub fn resolve_heading(doc: &Document, table: ElementRef<'_>) -> Option<Mood> {
    resolve_within(doc, table, &HEADING_TAGS)
}

fn resolve_within(doc: &Document, table: ElementRef<'_>, tags: &[&str]) -> Option<Mood> {
    doc.preceding(table, tags)
        .take(CONTEXT_LOOKBACK)
        .find_map(|el| classify(&text_of(el)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_table_mood(markup: &str, headings_only: bool) -> Option<Mood> {
        let doc = Document::parse(markup);
        let table = doc.find_all(&["table"])[0];
        if headings_only { resolve_heading(&doc, table) } else { resolve(&doc, table) }
    }

    #[test]
    fn tie_break_within_one_text() {
        assert_eq!(classify("Conditionnel et Subjonctif"), Some(Mood::Subjonctif));
        assert_eq!(classify("subjonctif / INDICATIF"), Some(Mood::Indicatif));
        assert_eq!(classify("Impératif"), None);
    }

    #[test]
    fn nearest_element_wins_over_priority() {
        let html = r#"
            <h2>Indicatif</h2>
            <h3>Conditionnel</h3>
            <table><tr><th>Présent</th></tr></table>
        "#;
        assert_eq!(first_table_mood(html, false), Some(Mood::Conditionnel));
    }

    #[test]
    fn lookback_is_bounded() {
        let mut html = String::from("<h2>Subjonctif</h2>");
        for _ in 0..10 {
            html.push_str("<p>bruit</p>");
        }
        html.push_str("<table><tr><th>Présent</th></tr></table>");
        assert_eq!(first_table_mood(&html, false), None);
        // Headings-only scan ignores the paragraphs, so the heading is in range.
        assert_eq!(first_table_mood(&html, true), Some(Mood::Subjonctif));
    }

    #[test]
    fn heading_lookback_is_bounded() {
        let page = |filler: usize| {
            let mut html = String::from("<h2>Conditionnel</h2>");
            for i in 0..filler {
                html.push_str(&format!("<h{}>Forme {i}</h{}>", 3 + i % 2, 3 + i % 2));
            }
            html.push_str("<table><tr><th>Présent</th></tr></table>");
            html
        };
        assert_eq!(first_table_mood(&page(9), true), Some(Mood::Conditionnel));
        assert_eq!(first_table_mood(&page(10), true), None);
    }

    #[test]
    fn paragraphs_count_only_for_standard_scan() {
        let html = r#"
            <h2>Indicatif</h2>
            <p>Mode subjonctif</p>
            <table><tr><th>Présent</th></tr></table>
        "#;
        assert_eq!(first_table_mood(html, false), Some(Mood::Subjonctif));
        assert_eq!(first_table_mood(html, true), Some(Mood::Indicatif));
    }

    #[test]
    fn no_context_is_none() {
        assert_eq!(first_table_mood("<table><tr><td>x</td></tr></table>", false), None);
    }
}
