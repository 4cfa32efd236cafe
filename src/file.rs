// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::core::sanitize::normalize_ws;
use crate::csv::write_records;
use crate::data::ConjugationRecord;
use crate::error::BatchError;

/// Verbs to scrape: one per line, trimmed, blank lines dropped.
pub fn read_verb_list(path: &Path) -> Result<Vec<String>, BatchError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(BatchError::MissingInput { path: path.to_path_buf() });
        }
        Err(e) => return Err(e.into()),
    };
    Ok(parse_verb_list(&text))
}

pub fn parse_verb_list(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize_ws)
        .filter(|l| !l.is_empty())
        .collect()
}

/// Write the export file described by `export`. Returns the final path written to.
/// A path without extension gets the format's one; an explicit extension is kept.
pub fn write_export(
    export: &ExportOptions,
    records: &[ConjugationRecord],
) -> Result<PathBuf, BatchError> {
    let mut path = export.out_path.clone();
    if path.extension().is_none() {
        path.set_extension(export.format.ext());
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, records, export.include_headers, export.delim())?;
    out.flush()?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
