// src/scrape/source.rs
//
// Where snapshot HTML comes from. The browser step that produced the files
// is not part of this crate; we only read what it left behind.
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::config::consts::SNAPSHOT_EXT;
use crate::error::{Result, ScrapeError};

pub trait SnapshotSource {
    /// Full page markup for one venue/day.
    fn load(&self, venue: &str, day: &str) -> Result<String>;
}

impl<F> SnapshotSource for F
where
    F: Fn(&str, &str) -> Result<String>,
{
    fn load(&self, venue: &str, day: &str) -> Result<String> {
        self(venue, day)
    }
}

/// Saved pages on disk: `<dir>/<Venue>_<Day>.txt`.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, venue: &str, day: &str) -> PathBuf {
        self.dir.join(format!("{venue}_{day}.{SNAPSHOT_EXT}"))
    }
}

impl SnapshotSource for DirSource {
    fn load(&self, venue: &str, day: &str) -> Result<String> {
        let path = self.path_for(venue, day);
        fs::read_to_string(&path).map_err(|e| ScrapeError::Source {
            venue: s!(venue),
            day: s!(day),
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

/// In-memory pages keyed by (venue, day).
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    pages: HashMap<(String, String), String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, venue: &str, day: &str, html: impl Into<String>) -> &mut Self {
        self.pages.insert((s!(venue), s!(day)), html.into());
        self
    }
}

impl SnapshotSource for MemorySource {
    fn load(&self, venue: &str, day: &str) -> Result<String> {
        self.pages
            .get(&(s!(venue), s!(day)))
            .cloned()
            .ok_or_else(|| ScrapeError::Source {
                venue: s!(venue),
                day: s!(day),
                reason: s!("no page loaded"),
            })
    }
}
