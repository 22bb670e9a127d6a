// src/scrape/scrape.rs
use std::ops::Range;

use crate::{
    config::options::{FailurePolicy, ScrapeOptions},
    error::{Result, ScrapeError},
    progress::Progress,
    record::SessionRecord,
    specs::{
        schedule::{self, ScheduleTiming},
        sessions::{self, RawFieldBag},
        time::TimeNormalizer,
    },
};

use super::source::SnapshotSource;

/// One venue/day pass. Its records and unresolved ids are slices of the
/// run-wide vectors, so the per-batch view costs nothing extra.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub venue: String,
    pub day: String,
    /// Session rows located in the page.
    pub found: usize,
    records: Range<usize>,
    unresolved: Range<usize>,
}

impl Batch {
    pub fn kept(&self) -> usize {
        self.records.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    /// Encounter order: venue outer, day inner, document order within a page.
    pub records: Vec<SessionRecord>,
    /// Ids of sessions whose timing could not be resolved, same order.
    pub unresolved: Vec<String>,
    pub batches: Vec<Batch>,
}

impl RunOutput {
    pub fn batch_records(&self, batch: &Batch) -> &[SessionRecord] {
        &self.records[batch.records.clone()]
    }

    pub fn batch_unresolved(&self, batch: &Batch) -> &[String] {
        &self.unresolved[batch.unresolved.clone()]
    }
}

/// Drive every venue × day page through locate → extract → parse → normalize.
pub fn collect_sessions(
    opts: &ScrapeOptions,
    source: &dyn SnapshotSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutput> {
    let normalizer = TimeNormalizer::from_options(opts)
        .map_err(|e| ScrapeError::Config(e.to_string()))?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(opts.batch_count());
    }

    let mut out = RunOutput::default();
    let result = run_batches(opts, source, &normalizer, &mut progress, &mut out);

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result.map(|_| out)
}

fn run_batches(
    opts: &ScrapeOptions,
    source: &dyn SnapshotSource,
    normalizer: &TimeNormalizer,
    progress: &mut Option<&mut dyn Progress>,
    out: &mut RunOutput,
) -> Result<()> {
    for venue in &opts.venues {
        for day in &opts.days {
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Loading {venue} {day}"));
            }
            let html = source.load(venue, day)?;
            let batch = collect_batch(&html, venue, day, opts, normalizer, out)?;

            logf!(
                "Sessions: {venue} {day}: found={} kept={} unresolved={}",
                batch.found,
                batch.kept(),
                batch.unresolved_count()
            );
            let ids = out.batch_unresolved(&batch);
            if !ids.is_empty() {
                logf!("Sessions: {venue} {day}: unresolved ids: {}", ids.join(", "));
            }
            if let Some(p) = progress.as_deref_mut() {
                p.batch_done(&batch, ids);
            }
            out.batches.push(batch);
        }
    }
    Ok(())
}

/// Process one page, appending to `out`. Returns the batch bookkeeping
/// (not yet pushed to `out.batches`).
pub fn collect_batch(
    html: &str,
    venue: &str,
    day: &str,
    opts: &ScrapeOptions,
    normalizer: &TimeNormalizer,
    out: &mut RunOutput,
) -> Result<Batch> {
    let doc = sessions::locate(html);
    let nodes = doc.nodes();
    logd!(
        "Sessions: {venue} {day}: {} rows, {} <i> removed",
        nodes.len(),
        doc.italics_removed()
    );

    let rec_start = out.records.len();
    let unres_start = out.unresolved.len();

    for node in nodes.iter().copied() {
        let bag = sessions::extract(node).map_err(|missing| {
            loge!("Sessions: {venue} {day}: {missing}");
            ScrapeError::Structural { venue: s!(venue), day: s!(day), missing }
        })?;

        match timed_record(bag, venue, day, opts, normalizer)? {
            Ok(record) => out.records.push(record),
            Err(id) => out.unresolved.push(id),
        }
    }

    Ok(Batch {
        venue: s!(venue),
        day: s!(day),
        found: nodes.len(),
        records: rec_start..out.records.len(),
        unresolved: unres_start..out.unresolved.len(),
    })
}

/// Outer `Err`: fatal. Inner `Err(id)`: session goes to the unresolved list.
fn timed_record(
    bag: RawFieldBag,
    venue: &str,
    day: &str,
    opts: &ScrapeOptions,
    normalizer: &TimeNormalizer,
) -> Result<std::result::Result<SessionRecord, String>> {
    let timing = schedule::parse(&bag.schedule_text);

    let when = match normalizer.normalize(&timing) {
        Ok(Some(when)) => when,
        Ok(None) => {
            logd!("Sessions: {} unresolved: {:?}", bag.id, bag.schedule_text);
            return Ok(Err(bag.id));
        }
        Err(e) => match opts.on_timestamp_error {
            FailurePolicy::Abort => {
                let [day_text, start, end, ..] = timing.fields();
                loge!(
                    "Sessions: {venue} {day}: session {}: day={:?} start={:?} end={:?}: {e}",
                    bag.id, day_text, start, end
                );
                return Err(ScrapeError::Timestamp {
                    venue: s!(venue),
                    day: s!(day),
                    session: bag.id,
                    source: e,
                });
            }
            FailurePolicy::Skip => {
                logw!("Sessions: {venue} {day}: session {} skipped: {e}", bag.id);
                return Ok(Err(bag.id));
            }
        },
    };

    // normalize() only yields a value for resolved timing
    let ScheduleTiming::Resolved(slot) = timing else {
        return Ok(Err(bag.id));
    };

    if when.is_inverted() {
        if opts.reject_inverted {
            logw!(
                "Sessions: {} ends before it starts ({} - {}), treated as unresolved",
                bag.id, slot.start_time, slot.end_time
            );
            return Ok(Err(bag.id));
        }
        logw!(
            "Sessions: {} has non-positive duration {} min ({} - {})",
            bag.id, when.duration_minutes, slot.start_time, slot.end_time
        );
    }

    Ok(Ok(SessionRecord::new(bag, slot, when)))
}
