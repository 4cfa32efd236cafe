// src/specs/pronominal.rs
//! Dual-paradigm extraction for the one pronominal verb rendered with two
//! accepted conjugations (`je m'assieds` / `je m'assois`).
//!
//! Paradigm tables are the ones containing "nous nous". Each is assigned to
//! variant A or B by stem, read row by row (tense header rows switch the
//! current tense), and the two variants are then merged per
//! (mood, tense, person) into `"{A} ou {B}"`.
//!
//! Keys produced by only one variant are dropped.

use std::collections::HashMap;

use scraper::ElementRef;

use crate::config::consts::{PRONOMINAL_MARKER, VARIANT_A_STEMS, VARIANT_B_STEMS};
use crate::core::html::{cells_of, rows_of, text_of, Document};
use crate::core::sanitize::{is_placeholder, normalize_nbsp, strip_trailing_punct};
use crate::data::{ConjugationRecord, Mood, PersonSlot, Tense, PERSONS};
use crate::error::ExtractError;

use super::{conjugation, mood, Extraction, ExtractWarning};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variant {
    A,
    B,
}

/// Variant from stems found in a table's text. A is checked first.
pub fn classify_variant(text: &str) -> Option<Variant> {
    if VARIANT_A_STEMS.iter().any(|s| text.contains(s)) {
        Some(Variant::A)
    } else if VARIANT_B_STEMS.iter().any(|s| text.contains(s)) {
        Some(Variant::B)
    } else {
        None
    }
}

type Key = (Mood, Tense, usize);

/// A form read from a paradigm table, not yet tied to a verb.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartialForm {
    pub mood: Mood,
    pub tense: Tense,
    pub person: usize,
    pub form: String,
    pub transcription: String,
}

impl PartialForm {
    fn key(&self) -> Key {
        (self.mood, self.tense, self.person)
    }
}

pub fn extract(doc: &Document, verb: &str) -> Result<Extraction, ExtractError> {
    let mut a_tables = Vec::new();
    let mut b_tables = Vec::new();

    for table in doc.find_all(&["table"]) {
        let text = normalize_nbsp(&text_of(table));
        if !text.contains(PRONOMINAL_MARKER) {
            continue;
        }
        match classify_variant(&text) {
            Some(Variant::A) => a_tables.push(table),
            Some(Variant::B) => b_tables.push(table),
            None => logd!("{verb}: pronominal table without a known stem"),
        }
    }

    if a_tables.is_empty() || b_tables.is_empty() {
        logw!(
            "{verb}: expected two paradigms, found {} A / {} B tables; using standard extraction",
            a_tables.len(),
            b_tables.len()
        );
        let records = conjugation::extract(doc, verb)?;
        return Ok(Extraction {
            records,
            warning: Some(ExtractWarning::MissingVariant {
                a_tables: a_tables.len(),
                b_tables: b_tables.len(),
            }),
        });
    }

    let a: Vec<PartialForm> = a_tables.iter().flat_map(|t| read_table(doc, *t)).collect();
    let b: Vec<PartialForm> = b_tables.iter().flat_map(|t| read_table(doc, *t)).collect();

    Ok(Extraction { records: merge(verb, &a, &b), warning: None })
}

fn read_table(doc: &Document, table: ElementRef<'_>) -> Vec<PartialForm> {
    let Some(mood) = mood::resolve_heading(doc, table) else {
        logd!("pronominal table has no mood heading");
        return Vec::new();
    };
    let rows: Vec<Vec<String>> = rows_of(table)
        .into_iter()
        .map(|row| cells_of(row).into_iter().map(text_of).collect())
        .collect();
    read_rows(mood, &rows)
}

/* ---------------- Row scanning ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RowState {
    Seeking,
    InTense { tense: Tense, row: usize },
}

impl RowState {
    /// Next state after a data row has been consumed at `row`.
    fn advance(tense: Tense, row: usize) -> RowState {
        if row + 1 >= PERSONS.len() {
            RowState::Seeking
        } else {
            RowState::InTense { tense, row: row + 1 }
        }
    }
}

/// Scan rows of one paradigm table. Header rows (first cell is a tense label)
/// open a block of up to six data rows; anything past the sixth is ignored
/// until the next header.
pub fn read_rows(mood: Mood, rows: &[Vec<String>]) -> Vec<PartialForm> {
    let mut out = Vec::new();
    let mut state = RowState::Seeking;

    for cells in rows {
        if let Some(tense) = cells.first().and_then(|c| Tense::from_label(c)) {
            state = RowState::InTense { tense, row: 0 };
            continue;
        }
        let RowState::InTense { tense, row } = state else { continue };
        if cells.len() < 2 {
            continue;
        }
        state = RowState::advance(tense, row);

        if !mood.allows(tense) {
            continue;
        }
        let verb_form = strip_trailing_punct(cells[1].trim());
        if is_placeholder(verb_form) {
            continue;
        }
        let pronoun = normalize_nbsp(&cells[0]);
        let form = if tense.is_compound() {
            compound_pronominal(&pronoun, verb_form)
        } else {
            attach_pronoun(&pronoun, verb_form)
        };

        out.push(PartialForm {
            mood,
            tense,
            person: row,
            form,
            transcription: conjugation::pronunciation(cells),
        });
    }

    out
}

/// `"je me suis" + "assis"` → `"me suis assis"`.
pub fn compound_pronominal(pronoun: &str, verb_form: &str) -> String {
    let tokens: Vec<&str> = pronoun.split_whitespace().collect();
    match tokens.len() {
        0 => verb_form.to_string(),
        1 => format!("{} {verb_form}", tokens[0]),
        _ => format!("{} {verb_form}", tokens[1..].join(" ")),
    }
}

/// Reflexive pronoun + form. `nous`/`vous` keep a space; elided `m'`, `t'`, `s'`
/// (and the odd unelided `me`, `te`, `se`) attach directly.
pub fn attach_pronoun(pronoun: &str, verb_form: &str) -> String {
    match pronoun.split_whitespace().last() {
        Some(tok @ ("nous" | "vous")) => format!("{tok} {verb_form}"),
        Some(tok) => format!("{tok}{verb_form}"),
        None => verb_form.to_string(),
    }
}

/* ---------------- Merge ---------------- */

#[derive(Default)]
struct Pair<'a> {
    a: Option<&'a PartialForm>,
    b: Option<&'a PartialForm>,
}

/// Join two variant values; only identical values collapse.
fn either(a: &str, b: &str) -> String {
    if a == b {
        a.to_string()
    } else {
        format!("{a} ou {b}")
    }
}

/// Merge both variants in first-seen key order, A before B.
pub fn merge(verb: &str, a: &[PartialForm], b: &[PartialForm]) -> Vec<ConjugationRecord> {
    let mut order: Vec<Key> = Vec::new();
    let mut pairs: HashMap<Key, Pair<'_>> = HashMap::new();

    for (variant, forms) in [(Variant::A, a), (Variant::B, b)] {
        for pf in forms {
            let key = pf.key();
            let pair = pairs.entry(key).or_insert_with(|| {
                order.push(key);
                Pair::default()
            });
            let slot = match variant {
                Variant::A => &mut pair.a,
                Variant::B => &mut pair.b,
            };
            // first-seen wins within a variant
            if slot.is_none() {
                *slot = Some(pf);
            }
        }
    }

    let mut out = Vec::with_capacity(order.len());
    for key in order {
        let (mood, tense, row) = key;
        let Some(Pair { a: Some(a), b: Some(b) }) = pairs.get(&key) else {
            logd!("{verb}: {mood} {tense} row {row} present in one variant only; dropped");
            continue;
        };
        let Some(person) = PersonSlot::at(row) else { continue };
        out.push(ConjugationRecord::new(
            verb,
            mood,
            tense,
            person,
            either(&a.form, &b.form),
            either(&a.transcription, &b.transcription),
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn pf(tense: Tense, person: usize, form: &str, tr: &str) -> PartialForm {
        PartialForm {
            mood: Mood::Indicatif,
            tense,
            person,
            form: form.into(),
            transcription: tr.into(),
        }
    }

    #[test]
    fn elision_attaches_without_space() {
        assert_eq!(attach_pronoun("je m'", "assieds"), "m'assieds");
        assert_eq!(attach_pronoun("je\u{00A0}m’", "assieds"), "m’assieds");
        assert_eq!(attach_pronoun("nous nous", "asseyons"), "nous asseyons");
        assert_eq!(attach_pronoun("que vous vous", "asseyiez"), "vous asseyiez");
        assert_eq!(attach_pronoun("", "assieds"), "assieds");
    }

    #[test]
    fn compound_keeps_auxiliary() {
        assert_eq!(compound_pronominal("je me suis", "assis"), "me suis assis");
        assert_eq!(compound_pronominal("il s'est", "assis"), "s'est assis");
        assert_eq!(compound_pronominal("s'est", "assis"), "s'est assis");
        assert_eq!(compound_pronominal("", "assis"), "assis");
    }

    #[test]
    fn variant_by_stem() {
        assert_eq!(classify_variant("nous nous asseyons"), Some(Variant::A));
        assert_eq!(classify_variant("nous nous assoyons"), Some(Variant::B));
        assert_eq!(classify_variant("nous nous assîmes"), None);
    }

    #[test]
    fn rows_follow_tense_headers() {
        let rows = vec![
            row(&["Présent"]),
            row(&["je m’", "assieds", "\\ʒə ", "m‿a.sje\\"]),
            row(&["tu t’", "assieds"]),
            row(&["il s’", "assied"]),
            row(&["nous nous", "asseyons"]),
            row(&["vous vous", "asseyez"]),
            row(&["ils s’", "asseyent"]),
            row(&["surplus", "ignored"]),
            row(&["Passé composé"]),
            row(&["je\u{00A0}me suis", "assis"]),
        ];
        let out = read_rows(Mood::Indicatif, &rows);
        assert_eq!(out.len(), 7);
        assert_eq!(out[0].form, "m’assieds");
        assert_eq!(out[0].transcription, "\\ʒə m‿a.sje\\");
        assert_eq!(out[3].form, "nous asseyons");
        assert_eq!(out[5].person, 5);
        assert_eq!(out[6].tense, Tense::PasseCompose);
        assert_eq!(out[6].form, "me suis assis");
        assert_eq!(out[6].person, 0);
    }

    #[test]
    fn rows_before_any_header_are_ignored() {
        let rows = vec![row(&["je m’", "assieds"]), row(&["Imparfait"]), row(&["je m’", "asseyais"])];
        let out = read_rows(Mood::Indicatif, &rows);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].tense, Tense::Imparfait);
    }

    #[test]
    fn tenses_outside_mood_allow_list_are_dropped() {
        let rows = vec![row(&["Passé simple"]), row(&["que je m’", "assisse"])];
        assert!(read_rows(Mood::Subjonctif, &rows).is_empty());
    }

    #[test]
    fn merge_joins_differing_forms() {
        let a = vec![pf(Tense::Present, 0, "m'assieds", "\\a\\"), pf(Tense::Present, 1, "t'assieds", "")];
        let b = vec![pf(Tense::Present, 0, "m'assois", "\\b\\"), pf(Tense::PasseSimple, 0, "m'assis", "")];
        let out = merge("s'asseoir", &a, &b);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].conjugated_form, "m'assieds ou m'assois");
        assert_eq!(out[0].transcription, "\\a\\ ou \\b\\");
        assert_eq!(out[0].id, "s'asseoir - indicatif - présent - première_singulier");
    }

    #[test]
    fn merge_collapses_identical_forms() {
        let a = vec![pf(Tense::PasseSimple, 2, "s'assit", "\\x\\")];
        let b = vec![pf(Tense::PasseSimple, 2, "s'assit", "\\x\\")];
        let out = merge("s'asseoir", &a, &b);
        assert_eq!(out[0].conjugated_form, "s'assit");
        assert_eq!(out[0].transcription, "\\x\\");
        assert_eq!(out[0].tense, Tense::PasseSimple);
    }

    #[test]
    fn merge_keeps_both_sides_when_one_transcription_is_empty() {
        let a = vec![pf(Tense::Present, 0, "m'assieds", "\\a\\")];
        let b = vec![pf(Tense::Present, 0, "m'assois", "")];
        let out = merge("s'asseoir", &a, &b);
        assert_eq!(out[0].transcription, "\\a\\ ou ");

        let out = merge("s'asseoir", &b, &a);
        assert_eq!(out[0].transcription, " ou \\a\\");
        assert_eq!(out[0].conjugated_form, "m'assois ou m'assieds");
    }

    #[test]
    fn merge_order_is_first_seen() {
        let a = vec![pf(Tense::Imparfait, 0, "x", ""), pf(Tense::Present, 0, "y", "")];
        let b = vec![pf(Tense::Present, 0, "z", ""), pf(Tense::Imparfait, 0, "w", "")];
        let forms: Vec<String> = merge("v", &a, &b).into_iter().map(|r| r.conjugated_form).collect();
        assert_eq!(forms, vec!["x ou w", "y ou z"]);
    }
}
