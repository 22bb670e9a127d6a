// src/log.rs
//
// Thin layer over `tracing`: the crate logs through the short macros below,
// the binary decides where lines end up via `init`.
use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::consts::LOG_FILE;

/// Install the global subscriber: stderr always, plus an append-only file
/// when `log_file` is given. Filter comes from `RUST_LOG`, default `info`.
/// Safe to call more than once; later calls are ignored.
pub fn init(log_file: Option<&Path>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let file_layer = log_file.and_then(|p| {
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                let _ = fs::create_dir_all(parent);
            }
        }
        OpenOptions::new().create(true).append(true).open(p).ok()
    })
    .map(|file| fmt::layer().with_ansi(false).with_writer(Mutex::new(file)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr)
        .with(file_layer)
        .try_init();
}

/// Default debug log location (relative to the working directory).
pub fn default_log_file() -> &'static Path {
    Path::new(LOG_FILE)
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warning-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
