// src/cli.rs
use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};

use crate::{
    config::options::{AppOptions, ExportFormat, ExportOptions, ScrapeOptions},
    config::consts::{REQUEST_PAUSE_MS, REQUEST_TIMEOUT_SECS},
    error::BatchError,
    progress::Progress,
    runner::{self, RunSummary},
};

/// Scrape French verb conjugation tables into CSV.
#[derive(Debug, Parser)]
#[command(name = "conj_scrape", version, about)]
pub struct Args {
    /// Text file with one verb per line
    pub input: PathBuf,

    /// File to write conjugations to
    pub output: PathBuf,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    pub format: Format,

    /// Pause after each verb, in milliseconds
    #[arg(long, default_value_t = REQUEST_PAUSE_MS)]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds
    #[arg(long, default_value_t = REQUEST_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Emit a header row
    #[arg(long)]
    pub include_headers: bool,

    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Tsv,
}

impl From<Format> for ExportFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Csv => ExportFormat::Csv,
            Format::Tsv => ExportFormat::Tsv,
        }
    }
}

impl Args {
    pub fn options(&self) -> AppOptions {
        AppOptions {
            scrape: ScrapeOptions {
                delay: Duration::from_millis(self.delay_ms),
                timeout: Duration::from_secs(self.timeout_secs),
            },
            export: ExportOptions {
                format: self.format.into(),
                out_path: self.output.clone(),
                include_headers: self.include_headers,
            },
        }
    }
}

/// Prints one line per verb to stdout.
#[derive(Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn item_failed(&mut self, verb: &str, reason: &str) {
        println!("Error scraping {verb}: {reason}");
    }
}

pub fn run(args: &Args) -> Result<RunSummary, BatchError> {
    crate::log::init(args.verbose);

    let mut progress = ConsoleProgress;
    let summary = runner::run(&args.options(), &args.input, Some(&mut progress))?;

    println!("Conjugations written to {}", summary.path.display());
    println!("Verbs processed: {}", summary.verbs);
    println!("Total unique conjugations: {}", summary.records);
    if !summary.failed_verbs.is_empty() {
        println!("Verbs without data: {}", summary.failed_verbs.join(", "));
    }
    Ok(summary)
}
