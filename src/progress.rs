// src/progress.rs
use crate::scrape::Batch;

/// Lightweight progress reporting for a run over venue/day batches.
/// Frontends implement this to surface per-batch diagnostics.
pub trait Progress {
    /// Called at the start with the number of venue/day batches.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one venue/day batch completes. `unresolved` are the ids
    /// from this batch that could not be timed.
    fn batch_done(&mut self, _batch: &Batch, _unresolved: &[String]) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}
