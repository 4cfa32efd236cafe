// src/specs/conjugation.rs
//! Standard extraction: one conjugation paradigm per verb.
//!
//! Every `<table>` whose first cell is a tense label is a candidate. The mood
//! comes from the surrounding markup (see `mood::resolve`); the table is kept
//! only if the tense is on that mood's allow-list. Data rows map to persons by
//! position, header row excluded, at most six rows.
//!
//! Cell layout per data row:
//! `pronoun | form | pronunciation-start | pronunciation-end`
//! (the pronunciation may also come as a single third cell, or be absent).

use scraper::ElementRef;

use crate::core::html::{cells_of, rows_of, text_of, Document};
use crate::core::sanitize::{is_placeholder, normalize_apostrophes, normalize_nbsp, strip_trailing_punct};
use crate::data::{ConjugationRecord, Mood, PersonSlot, RowOutcome, SkipReason, Tense, PERSONS};
use crate::error::ExtractError;

use super::mood;

pub fn extract(doc: &Document, verb: &str) -> Result<Vec<ConjugationRecord>, ExtractError> {
    let mut out = Vec::new();

    for table in doc.find_all(&["table"]) {
        let Some((mood, tense)) = classify_table(doc, table) else { continue };

        let rows = rows_of(table);
        for (idx, row) in rows.iter().skip(1).take(PERSONS.len()).enumerate() {
            let cells: Vec<String> = cells_of(*row).into_iter().map(text_of).collect();
            match read_row(verb, mood, tense, idx, &cells) {
                RowOutcome::Record(rec) => out.push(rec),
                RowOutcome::Skip(reason) => {
                    logd!("{verb}: {mood} {tense} row {idx} skipped ({reason:?})");
                }
                RowOutcome::Fatal(err) => return Err(err),
            }
        }
    }

    Ok(out)
}

/// Tense from the header cell, mood from context; `None` for irrelevant tables.
fn classify_table(doc: &Document, table: ElementRef<'_>) -> Option<(Mood, Tense)> {
    let header = *rows_of(table).first()?;
    let first = *cells_of(header).first()?;
    let label = text_of(first);
    let tense = Tense::from_label(&label)?;

    let Some(mood) = mood::resolve(doc, table) else {
        logd!("table '{}' has no mood context", label.trim());
        return None;
    };
    mood.allows(tense).then_some((mood, tense))
}

/// One data row. `cells` are raw cell texts (untrimmed).
pub fn read_row(verb: &str, mood: Mood, tense: Tense, idx: usize, cells: &[String]) -> RowOutcome {
    let Some(person) = PersonSlot::at(idx) else {
        return RowOutcome::Skip(SkipReason::BeyondPersons);
    };
    if cells.len() < 2 {
        return RowOutcome::Skip(SkipReason::TooFewCells);
    }

    let raw_form = if tense.is_compound() {
        match compound_form(&cells[0], &cells[1]) {
            Some(f) => f,
            None => {
                return RowOutcome::Fatal(ExtractError::CompoundTense {
                    verb: verb.to_string(),
                    row: idx,
                    cell: cells[0].clone(),
                });
            }
        }
    } else {
        cells[1].trim().to_string()
    };

    let form = strip_trailing_punct(&raw_form);
    if is_placeholder(form) {
        return RowOutcome::Skip(SkipReason::Placeholder);
    }
    if Tense::is_label_ci(form) {
        return RowOutcome::Skip(SkipReason::HeaderEcho);
    }

    if !person.matches_pronoun(&cells[0]) {
        logw!(
            "{verb}: {mood} {tense} row {idx} starts with {:?}, expected {}",
            cells[0].trim(),
            person.key()
        );
    }

    RowOutcome::Record(ConjugationRecord::new(
        verb,
        mood,
        tense,
        person,
        form.to_string(),
        pronunciation(cells),
    ))
}

/// `"j'ai" + "dîné"` → `"ai dîné"`, `"tu as" + "dîné"` → `"as dîné"`.
/// `None` when either half cannot be isolated; a placeholder participle (`—`) counts as missing.
pub fn compound_form(pronoun_aux: &str, participle: &str) -> Option<String> {
    let cell = normalize_apostrophes(&normalize_nbsp(pronoun_aux));
    let cell = cell.trim();

    let aux = if let Some(rest) = cell.strip_prefix("j'").or_else(|| cell.strip_prefix("J'")) {
        rest.trim()
    } else if cell.contains(char::is_whitespace) {
        cell.split_whitespace().last()?
    } else {
        return None;
    };

    let participle = participle.trim();
    if aux.is_empty() || is_placeholder(strip_trailing_punct(participle)) {
        return None;
    }
    Some(format!("{aux} {participle}"))
}

/// Pronunciation halves are joined untouched: spacing and slashes are part of the notation.
pub fn pronunciation(cells: &[String]) -> String {
    match cells.len() {
        n if n >= 4 => format!("{}{}", cells[2], cells[3]),
        3 => cells[2].trim().to_string(),
        _ => String::new(),
    }
}
