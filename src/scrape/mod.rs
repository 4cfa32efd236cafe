// src/scrape/mod.rs
mod scrape;

pub use scrape::parse_page;
pub use scrape::scrape_verb;
pub use scrape::collect_conjugations;
pub use scrape::Collected;
