// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::consts::*;
use crate::error::{Result, ScrapeError};

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub scrape: ScrapeOptions,
    pub export: ExportOptions,
}

impl AppOptions {
    /// Load from a TOML file; missing keys keep their defaults.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| ScrapeError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn from_toml_str(text: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

/// What to do when a resolved schedule cannot be turned into a timestamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the whole run.
    #[default]
    Abort,
    /// Send the session to the unresolved list and keep going.
    Skip,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrapeOptions {
    pub venues: Vec<String>,
    pub days: Vec<String>,
    pub event_year: i32,
    /// Reference timezone for schedule text, minutes east of UTC.
    pub utc_offset_minutes: i32,
    pub on_timestamp_error: FailurePolicy,
    /// Treat end <= start as unresolved instead of passing it through.
    pub reject_inverted: bool,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            venues: VENUES.iter().map(|v| s!(*v)).collect(),
            days: DAYS.iter().map(|d| s!(*d)).collect(),
            event_year: EVENT_YEAR,
            utc_offset_minutes: UTC_OFFSET_MINUTES,
            on_timestamp_error: FailurePolicy::Abort,
            reject_inverted: false,
        }
    }
}

impl ScrapeOptions {
    pub fn batch_count(&self) -> usize {
        self.venues.len() * self.days.len()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ExportType {
    /// One combined file for the whole run.
    SingleFile,
    /// One file per venue/day batch.
    PerBatch,
    #[default]
    Both,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator for the delimited formats.
    pub fn delimiter(&self) -> Option<u8> {
        match self {
            ExportFormat::Csv => Some(b','),
            ExportFormat::Tsv => Some(b'\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub export_type: ExportType,
    pub out_dir: PathBuf,
    pub file_stem: String,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            export_type: ExportType::Both,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_FILE),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// Combined output: "<out_dir>/<stem>.<ext>"
    pub fn out_path(&self) -> PathBuf {
        self.out_dir.join(join!(&self.file_stem, ".", self.format.ext()))
    }

    /// Per venue/day output stem (no directory, no extension).
    pub fn batch_stem(venue: &str, day: &str) -> String {
        join!(BATCH_FILE_PREFIX, venue, "_", day)
    }

    pub fn unresolved_path(&self) -> PathBuf {
        self.out_dir.join(UNRESOLVED_FILE)
    }

    /// Parse user text into dir + stem. A pasted extension is ignored; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}
