// src/file.rs

use std::{
    collections::HashMap,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, ExportType};
use crate::core::sanitize::sanitize_filename;
use crate::csv::write_records;
use crate::error::{Result, ScrapeError};
use crate::record::{SessionRecord, StructuredRecord};
use crate::scrape::RunOutput;

/// Write whatever `export.export_type` asks for. Returns every path written.
pub fn export_run(export: &ExportOptions, output: &RunOutput) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    if matches!(export.export_type, ExportType::PerBatch | ExportType::Both) {
        written.extend(write_export_per_batch(export, output)?);
    }
    if matches!(export.export_type, ExportType::SingleFile | ExportType::Both) {
        written.push(write_export_single(export, &output.records)?);
    }
    logf!("Export: wrote {} file(s) to {}", written.len(), export.out_dir.display());
    Ok(written)
}

/// Write the combined export to `export.out_path()`.
pub fn write_export_single(export: &ExportOptions, records: &[SessionRecord]) -> Result<PathBuf> {
    let path = export.out_path();
    write_records_to(&path, export, records)?;
    logd!("Export: {} records → {}", records.len(), path.display());
    Ok(path)
}

/// One file per venue/day batch: `<out_dir>/sessions_<Venue>_<Day>.<ext>`.
/// Batches with no records still get a file (headers only), matching what
/// the batch saw.
pub fn write_export_per_batch(export: &ExportOptions, output: &RunOutput) -> Result<Vec<PathBuf>> {
    ensure_directory(&export.out_dir)?;

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut written = Vec::with_capacity(output.batches.len());
    let ext = export.format.ext();

    for batch in &output.batches {
        let stem = sanitize_filename(&ExportOptions::batch_stem(&batch.venue, &batch.day), "sessions");
        let path = resolve_batch_filename(&export.out_dir, &stem, &mut seen, ext);
        write_records_to(&path, export, output.batch_records(batch))?;
        written.push(path);
    }
    Ok(written)
}

/// Create/truncate `path` and write `records` in the configured format.
pub fn write_records_to(path: &Path, export: &ExportOptions, records: &[SessionRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let file = File::create(path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);

    match export.format.delimiter() {
        Some(sep) => write_records(&mut out, records, export.include_headers, sep)?,
        None => write_json(&mut out, records)?,
    }
    out.flush()?;
    Ok(())
}

/// Structured records as one pretty-printed JSON array.
pub fn write_json<W: Write>(w: W, records: &[SessionRecord]) -> Result<()> {
    let shaped: Vec<StructuredRecord<'_>> = records.iter().map(SessionRecord::structured).collect();
    serde_json::to_writer_pretty(w, &shaped)?;
    Ok(())
}

/* ---------------- Diagnostics ---------------- */

/// Enumerated list of session ids that could not be timed.
pub fn unresolved_report(ids: &[String]) -> String {
    let mut out = s!("Unable to get details for the following sessions:\n");
    if ids.is_empty() {
        out.push_str("     (none)\n");
    }
    for (i, id) in ids.iter().enumerate() {
        out.push_str(&format!("{:>5}. {}\n", i + 1, id));
    }
    out
}

pub fn write_unresolved(export: &ExportOptions, ids: &[String]) -> Result<PathBuf> {
    let path = export.unresolved_path();
    ensure_directory(&export.out_dir)?;
    fs::write(&path, unresolved_report(ids))?;
    Ok(path)
}

/* ---------------- Paths ---------------- */

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Config(format!(
            "Path exists but is not a directory: {}",
            dir.display()
        )));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Duplicate handling **only within this run**
pub fn resolve_batch_filename(
    dir: &Path,
    stem: &str,                        // already sanitized, no extension
    seen_names: &mut HashMap<String, usize>,
    ext: &str,                         // "csv" | "tsv" | "json"
) -> PathBuf {
    // How many times have we seen this base?
    let count = seen_names.entry(s!(stem)).or_insert(0);

    // First occurrence: "<stem>.ext"
    // Subsequent:       "<stem> (N).ext" with N starting at 2
    let filename = if *count == 0 {
        format!("{stem}.{ext}")
    } else {
        format!("{stem} ({}).{ext}", *count + 1)
    };

    *count += 1;
    dir.join(filename)
}
