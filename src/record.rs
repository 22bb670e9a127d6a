// src/record.rs
//! Final output unit plus its two export shapes (delimited row, structured record).
use serde::Serialize;

use crate::specs::schedule::Slot;
use crate::specs::sessions::RawFieldBag;
use crate::specs::time::Normalized;

/// Column order of the delimited export.
pub const CSV_HEADERS: [&str; 12] = [
    "Session Number",
    "Session Title",
    "Session Desc",
    "Session Level",
    "Session Type",
    "Session Speakers",
    "Session Interest",
    "Day",
    "Start Time",
    "End Time",
    "Building",
    "Room",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interest {
    Interested,
    NotInterested,
}

impl Interest {
    pub fn from_flag(interested: bool) -> Self {
        if interested { Interest::Interested } else { Interest::NotInterested }
    }

    /// 0 = interested, 1 = not interested.
    pub fn event_kind(self) -> u8 {
        match self {
            Interest::Interested => 0,
            Interest::NotInterested => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::Interested => "Interested",
            Interest::NotInterested => "NotInterested",
        }
    }
}

/// A fully timed session. Only built from a resolved slot, so it never
/// carries "Unknown" placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub level: String,
    pub kind: String,
    pub speakers: String,
    pub interest: Interest,
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub scheduled_start: i64,
    pub duration_minutes: i64,
    pub building: String,
    pub room: String,
}

impl SessionRecord {
    pub fn new(bag: RawFieldBag, slot: Slot, when: Normalized) -> Self {
        Self {
            id: bag.id,
            code: bag.code,
            title: bag.title,
            description: bag.description,
            level: bag.level,
            kind: bag.kind,
            speakers: bag.speakers,
            interest: Interest::from_flag(bag.interested),
            day: slot.day,
            start_time: slot.start_time,
            end_time: slot.end_time,
            scheduled_start: when.start_epoch,
            duration_minutes: when.duration_minutes,
            building: slot.building,
            room: slot.room,
        }
    }

    /// One row in `CSV_HEADERS` order.
    pub fn csv_row(&self) -> [&str; 12] {
        [
            self.code.as_str(),
            self.title.as_str(),
            self.description.as_str(),
            self.level.as_str(),
            self.kind.as_str(),
            self.speakers.as_str(),
            self.interest.label(),
            self.day.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.building.as_str(),
            self.room.as_str(),
        ]
    }

    pub fn structured(&self) -> StructuredRecord<'_> {
        StructuredRecord {
            title: &self.title,
            desc: &self.description,
            detail: &self.code,
            level: &self.level,
            kind: &self.kind,
            speakers: &self.speakers,
            event_kind: self.interest.event_kind(),
            interested: self.interest,
            scheduled_date: self.scheduled_start,
            duration: self.duration_minutes,
            building: &self.building,
            room: &self.room,
        }
    }
}

/// Calendar-import shape of a record.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredRecord<'a> {
    pub title: &'a str,
    pub desc: &'a str,
    /// Session code, e.g. "ARC301-R".
    pub detail: &'a str,
    pub level: &'a str,
    #[serde(rename = "type")]
    pub kind: &'a str,
    pub speakers: &'a str,
    pub event_kind: u8,
    pub interested: Interest,
    /// Epoch seconds.
    pub scheduled_date: i64,
    /// Minutes.
    pub duration: i64,
    pub building: &'a str,
    pub room: &'a str,
}
