// src/error.rs
use thiserror::Error;

use crate::specs::sessions::MissingField;
use crate::specs::time::TimeError;

pub type Result<T> = std::result::Result<T, ScrapeError>;

#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Page layout changed: a session row lacks an element every row must carry.
    #[error("{venue} {day}: {missing}")]
    Structural {
        venue: String,
        day: String,
        missing: MissingField,
    },

    /// A resolved schedule did not fit the date format. Fatal under `FailurePolicy::Abort`.
    #[error("{venue} {day}: session {session}: {source}")]
    Timestamp {
        venue: String,
        day: String,
        session: String,
        #[source]
        source: TimeError,
    },

    #[error("snapshot for {venue} {day} unavailable: {reason}")]
    Source {
        venue: String,
        day: String,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
