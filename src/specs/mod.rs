// src/specs/mod.rs
//! # Conjugation page specs
//!
//! Knows how to read a conjugation page. Everything here is **pure parsing**
//! over an already fetched [`Document`]; fetching, pacing, deduplication and
//! export live elsewhere.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_conjugations → scrape::scrape_verb
//!                                        ↘  specs::extract_verb(doc, verb)
//!                                              ├─ conjugation::extract   (one paradigm)
//!                                              └─ pronominal::extract    (two paradigms, merged)
//! ```
//!
//! ## Conventions
//! - Tables are found by tag, tenses by exact header-cell label, moods by the
//!   nearest preceding heading/paragraph naming one (see [`mood`]).
//! - Rows map to persons by position; there is no person column on the pages.
//! - Irrelevant tables and rows are skipped silently (debug log only). The one
//!   strict check is the compound-tense auxiliary split, which fails the verb.
//!
//! ## Testing notes
//! Everything is testable offline against inline HTML fixtures.
pub mod conjugation;
pub mod mood;
pub mod pronominal;

use crate::config::consts::DUAL_VARIANT_VERB;
use crate::core::html::Document;
use crate::core::sanitize::normalize_apostrophes;
use crate::data::ConjugationRecord;
use crate::error::ExtractError;

/// Non-fatal conditions worth surfacing to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractWarning {
    /// Dual-paradigm verb with one or both table sets missing; standard extraction was used.
    MissingVariant { a_tables: usize, b_tables: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Extraction {
    pub records: Vec<ConjugationRecord>,
    pub warning: Option<ExtractWarning>,
}

/// True for the verb that goes through the dual-paradigm path.
pub fn is_dual_variant(verb: &str) -> bool {
    normalize_apostrophes(verb) == DUAL_VARIANT_VERB
}

/// Extract every record a page holds for `verb`.
pub fn extract_verb(doc: &Document, verb: &str) -> Result<Extraction, ExtractError> {
    if is_dual_variant(verb) {
        pronominal::extract(doc, verb)
    } else {
        Ok(Extraction { records: conjugation::extract(doc, verb)?, warning: None })
    }
}
