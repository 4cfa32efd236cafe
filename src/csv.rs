// src/csv.rs
use std::io::{self, Write};

use crate::core::sanitize::normalize_apostrophes;
use crate::data::{ConjugationRecord, HEADERS};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/* ---------------- Export-time transforms (no mutation of base) ---------------- */

/// Output row for one record. Typographic apostrophes become `'` in
/// id / infinitive / conjugated_form; the transcription is left as scraped.
pub fn export_row(rec: &ConjugationRecord) -> [String; 7] {
    let mut row = rec.fields();
    for cell in &mut row[..3] {
        *cell = normalize_apostrophes(cell);
    }
    row
}

/// Write all records, optionally preceded by the header row.
pub fn write_records<W: Write>(
    mut w: W,
    records: &[ConjugationRecord],
    include_headers: bool,
    sep: char,
) -> io::Result<()> {
    if include_headers {
        write_row(&mut w, &HEADERS, sep)?;
    }
    for rec in records {
        write_row(&mut w, &export_row(rec), sep)?;
    }
    Ok(())
}

/// Create a full export string from records.
pub fn to_export_string(records: &[ConjugationRecord], include_headers: bool, sep: char) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let _ = write_records(&mut buf, records, include_headers, sep);

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}
