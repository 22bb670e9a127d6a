// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of the session catalog: *where the ground truth
//! lives in the HTML* and *how to read the one free-text sentence that
//! carries a session's slot*.
//!
//! ## What lives here
//! - `sessions` – locating `div.sessionRow` nodes and pulling their fields.
//! - `schedule` – the availability sentence → `ScheduleTiming`.
//! - `time` – a resolved slot + event year → epoch seconds and duration.
//!
//! ## What does **not** live here
//! - **Batching, failure policy, diagnostics** – `scrape::collect_*`.
//! - **Export formatting and files** – `record`, `csv`, `file`.
//!
//! ## Typical call chain
//! ```text
//! cli → scrape::collect_sessions → sessions::locate / extract
//!                                ↘ schedule::parse → time::normalize
//!                                ↘ SessionRecord appended to RunOutput
//! ```
//!
//! ## Conventions & invariants
//! - Pure functions over already-fetched HTML; testable offline with fixtures.
//! - `Unresolved` is a value, not an error. Only structural breakage and date
//!   parsing failures are errors, and the caller decides what they cost.
pub mod schedule;
pub mod sessions;
pub mod time;
