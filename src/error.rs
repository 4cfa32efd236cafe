// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Anything that keeps a page from reaching the parser.
/// Never fatal for a batch: the verb just yields no records.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { status: u16, url: String },
}

/// Extraction failures that abort the current verb.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// Compound-tense row where auxiliary or participle could not be isolated.
    #[error("{verb}: cannot split auxiliary/participle in row {row} ({cell:?})")]
    CompoundTense { verb: String, row: usize, cell: String },
}

/// Why a single verb produced nothing. Logged; the batch moves on.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),
}

/// Batch-level failures. These stop the run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error("input file '{}' not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
