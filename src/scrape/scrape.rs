// src/scrape/scrape.rs
use std::{thread, time::{Duration, Instant}};

use crate::{
    config::options::ScrapeOptions,
    core::{html::Document, net::{conjugation_url, Fetch}},
    error::{ExtractError, ScrapeError},
    progress::Progress,
    specs::{self, Extraction, ExtractWarning},
    store::RecordSet,
};

/// Parse already fetched markup for one verb.
pub fn parse_page(markup: &str, verb: &str) -> Result<Extraction, ExtractError> {
    let t = Instant::now();
    let doc = Document::parse(markup);
    let out = specs::extract_verb(&doc, verb);
    logd!("{verb}: parsed page in {:?}", t.elapsed());
    out
}

/// Fetch and parse one verb.
pub fn scrape_verb(fetcher: &dyn Fetch, verb: &str) -> Result<Extraction, ScrapeError> {
    let url = conjugation_url(verb);
    let markup = fetcher.fetch(&url)?;
    Ok(parse_page(&markup, verb)?)
}

/// What a batch collected.
#[derive(Debug, Default)]
pub struct Collected {
    pub records: RecordSet,
    /// Verbs that yielded nothing because of a fetch or extraction failure.
    pub failed: Vec<String>,
    /// Verbs that went through a fallback path.
    pub warnings: Vec<(String, ExtractWarning)>,
}

/// Scrape `verbs` strictly one after another, pausing between requests.
/// Per-verb failures are logged and skipped; the batch always completes.
pub fn collect_conjugations(
    verbs: &[String],
    fetcher: &dyn Fetch,
    opts: &ScrapeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Collected {
    let mut out = Collected::default();

    if let Some(p) = progress.as_deref_mut() {
        p.begin(verbs.len());
    }

    for (i, verb) in verbs.iter().enumerate() {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Scraping conjugations for: {verb}"));
        }

        match scrape_verb(fetcher, verb) {
            Ok(extraction) => {
                let total = extraction.records.len();
                let added = out.records.extend(extraction.records);
                logf!("{verb}: {total} records ({added} new)");
                if let Some(w) = extraction.warning {
                    out.warnings.push((verb.clone(), w));
                }
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(verb, total);
                }
            }
            Err(e) => {
                loge!("{verb}: {e}");
                out.failed.push(verb.clone());
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(verb, &e.to_string());
                }
            }
        }

        if i + 1 < verbs.len() {
            pause(opts.delay);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    out
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        thread::sleep(delay); // be polite
    }
}
