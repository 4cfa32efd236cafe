// src/progress.rs
/// Lightweight progress reporting for a batch run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of verbs.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when a verb was scraped; `records` is how many it produced.
    fn item_done(&mut self, _verb: &str, _records: usize) {}

    /// Called when a verb yielded nothing because of a fetch or extraction failure.
    fn item_failed(&mut self, _verb: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
