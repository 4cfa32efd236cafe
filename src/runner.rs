// src/runner.rs
use std::path::{Path, PathBuf};

use crate::{
    config::options::AppOptions,
    core::net::{Fetch, HttpFetcher},
    error::BatchError,
    file::{read_verb_list, write_export},
    progress::Progress,
    scrape,
};

/// Summary of what was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub verbs: usize,
    pub records: usize,
    pub failed_verbs: Vec<String>,
    pub path: PathBuf,
}

/// Top-level batch: read verbs from `input`, scrape over HTTP, write the export.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    opts: &AppOptions,
    input: &Path,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, BatchError> {
    let verbs = read_verb_list(input)?;
    let fetcher = HttpFetcher::new(opts.scrape.timeout)?;
    run_with(opts, &verbs, &fetcher, progress)
}

/// Same as [`run`] with the verb list and fetcher supplied by the caller.
pub fn run_with(
    opts: &AppOptions,
    verbs: &[String],
    fetcher: &dyn Fetch,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, BatchError> {
    logf!("Scraping {} verbs", verbs.len());
    let collected = scrape::collect_conjugations(verbs, fetcher, &opts.scrape, progress);

    let path = write_export(&opts.export, collected.records.records())?;
    logf!("Wrote {} records to {}", collected.records.len(), path.display());

    Ok(RunSummary {
        verbs: verbs.len(),
        records: collected.records.len(),
        failed_verbs: collected.failed,
        path,
    })
}
