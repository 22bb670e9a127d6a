// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};

use crate::config::consts::SNAPSHOT_DIR;
use crate::config::options::{AppOptions, ExportFormat, ExportType, FailurePolicy};
use crate::log::default_log_file;
use crate::file::{export_run, unresolved_report, write_unresolved};
use crate::progress::Progress;
use crate::scrape::{collect_sessions, Batch, DirSource};

#[derive(Parser, Debug)]
#[command(name = "catalog_scrape")]
#[command(about = "Extract conference sessions from saved catalog pages into CSV/TSV/JSON")]
#[command(version)]
pub struct Args {
    /// Directory holding `<Venue>_<Day>.txt` snapshots
    #[arg(short, long, value_name = "DIR", default_value = SNAPSHOT_DIR)]
    pub input: PathBuf,

    /// Combined output path; the extension follows --format
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// TOML file with [scrape] / [export] tables
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Year the schedule dates belong to
    #[arg(long)]
    pub year: Option<i32>,

    /// Comma-separated venue list
    #[arg(long, value_delimiter = ',')]
    pub venues: Option<Vec<String>>,

    /// Comma-separated day list
    #[arg(long, value_delimiter = ',')]
    pub days: Option<Vec<String>>,

    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    #[arg(long, value_enum)]
    pub export: Option<ExportType>,

    /// What an unparseable schedule date costs
    #[arg(long, value_enum)]
    pub on_timestamp_error: Option<FailurePolicy>,

    /// Send sessions whose end is not after their start to the unresolved list
    #[arg(long)]
    pub reject_inverted: bool,

    /// Omit the header line in CSV/TSV output
    #[arg(long)]
    pub no_headers: bool,

    /// Schedule timezone as minutes east of UTC (Las Vegas is -480)
    #[arg(long, allow_negative_numbers = true)]
    pub utc_offset: Option<i32>,

    /// Append logs to this file [default: .store/debug.log]
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    /// Defaults, then the config file, then flags.
    pub fn resolve(&self) -> Result<AppOptions> {
        let mut opts = match &self.config {
            Some(path) => AppOptions::from_toml_file(path)
                .wrap_err_with(|| format!("loading config {}", path.display()))?,
            None => AppOptions::default(),
        };

        let scrape = &mut opts.scrape;
        if let Some(y) = self.year { scrape.event_year = y; }
        if let Some(v) = &self.venues { scrape.venues = v.clone(); }
        if let Some(d) = &self.days { scrape.days = d.clone(); }
        if let Some(p) = self.on_timestamp_error { scrape.on_timestamp_error = p; }
        if let Some(off) = self.utc_offset { scrape.utc_offset_minutes = off; }
        if self.reject_inverted { scrape.reject_inverted = true; }

        let export = &mut opts.export;
        if let Some(f) = self.format { export.format = f; }
        if let Some(t) = self.export { export.export_type = t; }
        if let Some(out) = &self.out { export.set_path(&out.to_string_lossy()); }
        if self.no_headers { export.include_headers = false; }

        Ok(opts)
    }
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init(Some(args.log_file.as_deref().unwrap_or(default_log_file())));

    let opts = args.resolve()?;
    let source = DirSource::new(&args.input);
    let mut progress = ConsoleProgress::default();

    let output = collect_sessions(&opts.scrape, &source, Some(&mut progress))
        .wrap_err("scrape aborted")?;

    let written = export_run(&opts.export, &output).wrap_err("writing export")?;
    for path in &written {
        println!("Wrote {}", path.display());
    }

    let report = write_unresolved(&opts.export, &output.unresolved)?;
    print!("{}", unresolved_report(&output.unresolved));
    println!("Unresolved list saved to {}", report.display());
    println!(
        "{} sessions kept, {} unresolved, {} batches",
        output.records.len(),
        output.unresolved.len(),
        output.batches.len()
    );
    Ok(())
}

/* ---------------- Console progress ---------------- */

/// Prints one line per venue/day batch.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn batch_done(&mut self, batch: &Batch, unresolved: &[String]) {
        self.done += 1;
        println!(
            "[{:>2}/{}] {} {}: found {}, kept {}, unresolved {}",
            self.done,
            self.total,
            batch.venue,
            batch.day,
            batch.found,
            batch.kept(),
            unresolved.len()
        );
        if !unresolved.is_empty() {
            println!("        unresolved ids: {}", unresolved.join(", "));
        }
    }
}
