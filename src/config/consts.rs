// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://fr.m.wiktionary.org/wiki/Conjugaison:français/";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const REQUEST_PAUSE_MS: u64 = 500; // be polite

// Parse
pub const CONTEXT_LOOKBACK: usize = 10;
pub const STANDARD_CONTEXT_TAGS: [&str; 5] = ["h2", "h3", "h4", "p", "div"];
pub const HEADING_TAGS: [&str; 3] = ["h2", "h3", "h4"];

// Verb rendered with two coexisting paradigms (assied-/assoi-)
pub const DUAL_VARIANT_VERB: &str = "s'asseoir";
pub const PRONOMINAL_MARKER: &str = "nous nous";
pub const VARIANT_A_STEMS: [&str; 4] = ["assied", "assey", "assiér", "assier"];
pub const VARIANT_B_STEMS: [&str; 2] = ["assoi", "assoy"];

// Export
pub const DEFAULT_OUT_FILE: &str = "conjugations.csv";
