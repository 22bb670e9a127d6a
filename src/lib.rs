// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod record;
pub mod specs;

pub mod csv;
pub mod file;
pub mod progress;
pub mod scrape;

#[cfg(feature = "cli")]
pub mod cli;
