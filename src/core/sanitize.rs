// src/core/sanitize.rs

/// Apostrophe look-alikes that show up in elided forms (`j’`, `s’`).
const APOSTROPHES: [char; 3] = ['\u{2019}', '\u{2018}', '\u{02BC}'];

/// Trailing punctuation dropped from conjugated forms.
const TRAILING_PUNCT: [char; 6] = ['.', ',', '!', '?', ';', ':'];

/// Cells that stand for "no form" on the source pages.
const PLACEHOLDERS: [&str; 3] = ["—", "-", ""];

/// Replace typographic apostrophes with ASCII `'`.
pub fn normalize_apostrophes(s: &str) -> String {
    s.chars()
        .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
        .collect()
}

/// Non-breaking spaces (U+00A0, U+202F) become plain spaces.
pub fn normalize_nbsp(s: &str) -> String {
    s.replace(['\u{00A0}', '\u{202F}'], " ")
}

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn strip_trailing_punct(s: &str) -> &str {
    s.trim_end_matches(TRAILING_PUNCT)
}

pub fn is_placeholder(s: &str) -> bool {
    PLACEHOLDERS.contains(&s)
}
