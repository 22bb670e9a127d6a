// src/scrape/mod.rs
mod scrape;
pub mod source;

pub use scrape::{collect_batch, collect_sessions, Batch, RunOutput};
pub use source::{DirSource, MemorySource, SnapshotSource};
