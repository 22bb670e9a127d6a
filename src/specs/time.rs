// src/specs/time.rs
//
// Resolved slot strings → epoch seconds + duration. The page never prints a
// year, so the event year comes from configuration.
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use thiserror::Error;

use super::schedule::{ScheduleTiming, Slot};
use crate::config::consts::DATETIME_FORMAT;
use crate::config::options::ScrapeOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    pub start_epoch: i64,
    /// (end - start) in whole minutes, truncated. Not checked for sign here.
    pub duration_minutes: i64,
}

impl Normalized {
    pub fn is_inverted(&self) -> bool {
        self.duration_minutes <= 0
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    #[error("could not parse {value:?} with format {format:?}: {source}")]
    Parse {
        value: String,
        format: &'static str,
        #[source]
        source: chrono::ParseError,
    },

    #[error("UTC offset out of range: {0} minutes")]
    Offset(i32),
}

#[derive(Debug, Clone, Copy)]
pub struct TimeNormalizer {
    year: i32,
    offset: FixedOffset,
}

impl TimeNormalizer {
    pub fn new(year: i32, utc_offset_minutes: i32) -> Result<Self, TimeError> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or(TimeError::Offset(utc_offset_minutes))?;
        Ok(Self { year, offset })
    }

    pub fn from_options(opts: &ScrapeOptions) -> Result<Self, TimeError> {
        Self::new(opts.event_year, opts.utc_offset_minutes)
    }

    /// `None` for unresolved timing; never invents a time.
    pub fn normalize(&self, timing: &ScheduleTiming) -> Result<Option<Normalized>, TimeError> {
        match timing {
            ScheduleTiming::Resolved(slot) => self.normalize_slot(slot).map(Some),
            ScheduleTiming::Unresolved => Ok(None),
        }
    }

    pub fn normalize_slot(&self, slot: &Slot) -> Result<Normalized, TimeError> {
        let start = self.instant(&slot.day, &slot.start_time)?;
        let end = self.instant(&slot.day, &slot.end_time)?;
        Ok(Normalized {
            start_epoch: start.timestamp(),
            duration_minutes: (end - start).num_seconds() / 60,
        })
    }

    fn instant(&self, day: &str, time: &str) -> Result<DateTime<FixedOffset>, TimeError> {
        let value = format!("{} {} {}", day, self.year, time);
        let naive = NaiveDateTime::parse_from_str(&value, DATETIME_FORMAT).map_err(|source| {
            TimeError::Parse { value: value.clone(), format: DATETIME_FORMAT, source }
        })?;
        naive
            .and_local_timezone(self.offset)
            .single()
            .ok_or(TimeError::Offset(self.offset.local_minus_utc() / 60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::schedule::parse;
    use chrono::{TimeZone, Utc};

    fn slot(day: &str, start: &str, end: &str) -> Slot {
        Slot {
            day: s!(day),
            start_time: s!(start),
            end_time: s!(end),
            building: s!("Venetian"),
            room: s!(),
        }
    }

    fn utc() -> TimeNormalizer {
        TimeNormalizer::new(2018, 0).unwrap()
    }

    #[test]
    fn one_hour_session_in_pacific_time() {
        let timing = parse(
            "Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306, 3307",
        );
        let n = TimeNormalizer::new(2018, -480)
            .unwrap()
            .normalize(&timing)
            .unwrap()
            .unwrap();
        assert_eq!(n.duration_minutes, 60);
        // 10:30 at UTC-8 == 18:30 UTC
        let want = Utc.with_ymd_and_hms(2018, 11, 26, 18, 30, 0).unwrap().timestamp();
        assert_eq!(n.start_epoch, want);
        assert_eq!(n.start_epoch, 1_543_257_000);
    }

    #[test]
    fn utc_reference_offset() {
        let n = utc().normalize_slot(&slot("Nov 26", "10:30 AM", "11:30 AM")).unwrap();
        assert_eq!(n.start_epoch, 1_543_228_200);
    }

    #[test]
    fn unresolved_yields_nothing() {
        let n = TimeNormalizer::new(2018, -480)
            .unwrap()
            .normalize(&ScheduleTiming::Unresolved)
            .unwrap();
        assert!(n.is_none());
    }

    #[test]
    fn single_digit_day_and_hour() {
        let n = utc().normalize_slot(&slot("Nov 5", "9:00 AM", "10:45 AM")).unwrap();
        assert_eq!(n.duration_minutes, 105);
        let want = Utc.with_ymd_and_hms(2018, 11, 5, 9, 0, 0).unwrap().timestamp();
        assert_eq!(n.start_epoch, want);
    }

    #[test]
    fn noon_and_midnight_edges() {
        let t = utc();
        let n = t.normalize_slot(&slot("Nov 27", "11:30 AM", "12:15 PM")).unwrap();
        assert_eq!(n.duration_minutes, 45);
        let n = t.normalize_slot(&slot("Nov 27", "12:00 AM", "12:30 AM")).unwrap();
        let want = Utc.with_ymd_and_hms(2018, 11, 27, 0, 0, 0).unwrap().timestamp();
        assert_eq!(n.start_epoch, want);
    }

    #[test]
    fn inverted_range_is_passed_through_negative() {
        let n = utc().normalize_slot(&slot("Nov 26", "2:00 PM", "1:00 PM")).unwrap();
        assert_eq!(n.duration_minutes, -60);
        assert!(n.is_inverted());

        let zero = utc().normalize_slot(&slot("Nov 26", "2:00 PM", "2:00 PM")).unwrap();
        assert_eq!(zero.duration_minutes, 0);
        assert!(zero.is_inverted());
    }

    #[test]
    fn bad_strings_report_the_offending_value() {
        let err = utc()
            .normalize_slot(&slot("Novembre 26", "10:30 AM", "11:30 AM"))
            .unwrap_err();
        match err {
            TimeError::Parse { value, format, .. } => {
                assert_eq!(value, "Novembre 26 2018 10:30 AM");
                assert_eq!(format, DATETIME_FORMAT);
            }
            other => panic!("unexpected {other:?}"),
        }

        assert!(utc().normalize_slot(&slot("Nov 26", "noon", "1:00 PM")).is_err());
    }

    #[test]
    fn offset_out_of_range_is_rejected() {
        assert_eq!(TimeNormalizer::new(2018, 24 * 60).unwrap_err(), TimeError::Offset(1440));
    }
}
