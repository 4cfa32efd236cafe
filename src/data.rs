// src/data.rs
//! Grammatical vocabulary and the output record.
//!
//! Everything here is plain data: the extractors in `specs` produce
//! [`ConjugationRecord`]s, `store` deduplicates them and `csv` flattens them.

use std::fmt;

use crate::error::ExtractError;

/* ---------------- Mood ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mood {
    Indicatif,
    Subjonctif,
    Conditionnel,
}

impl Mood {
    /// Check order doubles as the tie-break when several keywords share one text.
    pub const PRIORITY: [Mood; 3] = [Mood::Indicatif, Mood::Subjonctif, Mood::Conditionnel];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Indicatif => "indicatif",
            Mood::Subjonctif => "subjonctif",
            Mood::Conditionnel => "conditionnel",
        }
    }

    /// Tenses worth extracting under this mood.
    pub fn allowed_tenses(self) -> &'static [Tense] {
        use Tense::*;
        match self {
            Mood::Indicatif => &[Present, Imparfait, PasseSimple, PasseCompose, FuturSimple],
            Mood::Subjonctif => &[Present, Imparfait],
            Mood::Conditionnel => &[Present],
        }
    }

    pub fn allows(self, tense: Tense) -> bool {
        self.allowed_tenses().contains(&tense)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/* ---------------- Tense ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tense {
    Present,
    Imparfait,
    PasseSimple,
    PasseCompose,
    FuturSimple,
}

impl Tense {
    pub const ALL: [Tense; 5] = [
        Tense::Present,
        Tense::Imparfait,
        Tense::PasseSimple,
        Tense::PasseCompose,
        Tense::FuturSimple,
    ];

    /// Header-cell text as rendered on the source pages.
    pub fn label(self) -> &'static str {
        match self {
            Tense::Present => "Présent",
            Tense::Imparfait => "Imparfait",
            Tense::PasseSimple => "Passé simple",
            Tense::PasseCompose => "Passé composé",
            Tense::FuturSimple => "Futur simple",
        }
    }

    /// Lower-cased label; this is what lands in the `tense` column.
    pub fn display(self) -> &'static str {
        match self {
            Tense::Present => "présent",
            Tense::Imparfait => "imparfait",
            Tense::PasseSimple => "passé simple",
            Tense::PasseCompose => "passé composé",
            Tense::FuturSimple => "futur simple",
        }
    }

    /// Id fragment.
    pub fn slug(self) -> &'static str {
        match self {
            Tense::Present => "présent",
            Tense::Imparfait => "imparfait",
            Tense::PasseSimple => "passé_simple",
            Tense::PasseCompose => "passé_composé",
            Tense::FuturSimple => "futur_simple",
        }
    }

    /// Exact match against a header cell (surrounding whitespace ignored).
    pub fn from_label(text: &str) -> Option<Tense> {
        let text = text.trim();
        Tense::ALL.into_iter().find(|t| t.label() == text)
    }

    /// True when `text` reads like a tense header, whatever its case.
    pub fn is_label_ci(text: &str) -> bool {
        let lc = text.trim().to_lowercase();
        Tense::ALL.iter().any(|t| t.display() == lc)
    }

    /// Auxiliary + participle.
    pub fn is_compound(self) -> bool {
        matches!(self, Tense::PasseCompose)
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

/* ---------------- Person ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonSlot {
    pub ordinal: &'static str,
    pub number: &'static str,
    /// Subject pronouns that may open a row for this slot.
    pronouns: &'static [&'static str],
}

/// Row order of every conjugation table. Index 0..=5 maps positionally.
pub const PERSONS: [PersonSlot; 6] = [
    PersonSlot { ordinal: "première", number: "singulier", pronouns: &["je", "j'"] },
    PersonSlot { ordinal: "deuxième", number: "singulier", pronouns: &["tu"] },
    PersonSlot { ordinal: "troisième", number: "singulier", pronouns: &["il", "elle", "on"] },
    PersonSlot { ordinal: "première", number: "pluriel", pronouns: &["nous"] },
    PersonSlot { ordinal: "deuxième", number: "pluriel", pronouns: &["vous"] },
    PersonSlot { ordinal: "troisième", number: "pluriel", pronouns: &["ils", "elles"] },
];

impl PersonSlot {
    pub fn at(row: usize) -> Option<PersonSlot> {
        PERSONS.get(row).copied()
    }

    /// `"première_singulier"` etc.
    pub fn key(&self) -> String {
        format!("{}_{}", self.ordinal, self.number)
    }

    /// Loose check that a pronoun cell belongs to this slot.
    /// Accepts a leading `que`/`qu'` (subjonctif) and elided or typographic apostrophes.
    pub fn matches_pronoun(&self, cell: &str) -> bool {
        let lc = crate::core::sanitize::normalize_apostrophes(&cell.trim().to_lowercase());
        let rest = lc
            .strip_prefix("que ")
            .or_else(|| lc.strip_prefix("qu'"))
            .unwrap_or(&lc)
            .trim_start();
        self.pronouns.iter().any(|p| {
            rest.strip_prefix(p).is_some_and(|tail| {
                p.ends_with('\'') || tail.is_empty() || tail.starts_with([' ', '/'])
            })
        })
    }
}

/* ---------------- Record ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConjugationRecord {
    pub id: String,
    pub infinitive: String,
    pub conjugated_form: String,
    pub transcription: String,
    pub mood: Mood,
    pub tense: Tense,
    pub person: PersonSlot,
}

impl ConjugationRecord {
    pub fn new(
        verb: &str,
        mood: Mood,
        tense: Tense,
        person: PersonSlot,
        conjugated_form: String,
        transcription: String,
    ) -> Self {
        Self {
            id: record_id(verb, mood, tense, &person),
            infinitive: verb.to_string(),
            conjugated_form,
            transcription,
            mood,
            tense,
            person,
        }
    }

    /// Flat row in output column order.
    pub fn fields(&self) -> [String; 7] {
        [
            self.id.clone(),
            self.infinitive.clone(),
            self.conjugated_form.clone(),
            self.transcription.clone(),
            self.mood.as_str().to_string(),
            self.tense.display().to_string(),
            self.person.key(),
        ]
    }
}

/// `"{verb} - {mood} - {tense_slug} - {person}_{number}"`
pub fn record_id(verb: &str, mood: Mood, tense: Tense, person: &PersonSlot) -> String {
    format!("{verb} - {} - {} - {}", mood.as_str(), tense.slug(), person.key())
}

pub const HEADERS: [&str; 7] = [
    "id", "infinitive", "conjugated_form", "transcription", "mood", "tense", "person",
];

/* ---------------- Row outcomes ---------------- */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    BeyondPersons,
    TooFewCells,
    Placeholder,
    HeaderEcho,
}

/// Result of reading one table row: lenient skips, strict failures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RowOutcome {
    Record(ConjugationRecord),
    Skip(SkipReason),
    Fatal(ExtractError),
}
