// src/specs/schedule.rs
//! Schedule text → timing.
//!
//! The catalog renders each session's slot as one human sentence inside
//! `ul.availableSessions`, e.g.
//!
//! ```text
//! Reserve seat Mon, Nov 26, 10:30 AM - 11:30 AM. Venetian, Level 2, Murano 3306, 3307
//! ```
//!
//! A leading seat/waitlist button label may precede it. Those labels carry no
//! timing and are stripped before matching. Anything that does not fit the
//! sentence shape is `Unresolved`, which is an expected outcome (cancelled or
//! free-form slots are common), never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::sanitize::normalize_ws;

/// Rendered value of every field of an unresolved timing.
pub const UNKNOWN: &str = "Unknown";

/// Button labels / notices the page may put in front of the slot sentence.
const AFFORDANCES: [&str; 7] = [
    "Reserve seat",
    "Unreserve seat",
    "Add to waitlist",
    "Remove from waitlist",
    "Join waitlist",
    "Leave waitlist",
    "You have a conflict with this session time in your schedule.",
];

// weekday, day, start - end. building[, room part]*
// Start/end separator: ASCII hyphen, en dash or em dash.
static SLOT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<weekday>[^,]+),\s*(?P<day>[^,]+),\s*(?P<start>[^,\-–—]+?)\s*[-–—]\s*(?P<end>[^,.]+?)\s*[.,]\s*(?P<building>[^,]+?)\s*(?:,(?P<room>.*))?$",
    )
    .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Month + day of month, e.g. "Nov 26".
    pub day: String,
    pub start_time: String,
    pub end_time: String,
    pub building: String,
    /// Sub-room parts joined by " - ". May be empty.
    pub room: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleTiming {
    Resolved(Slot),
    Unresolved,
}

impl ScheduleTiming {
    pub fn is_resolved(&self) -> bool {
        matches!(self, ScheduleTiming::Resolved(_))
    }

    /// `[day, start, end, building, room]` as strings; all "Unknown" when unresolved.
    pub fn fields(&self) -> [&str; 5] {
        match self {
            ScheduleTiming::Resolved(s) => [
                s.day.as_str(),
                s.start_time.as_str(),
                s.end_time.as_str(),
                s.building.as_str(),
                s.room.as_str(),
            ],
            ScheduleTiming::Unresolved => [UNKNOWN; 5],
        }
    }
}

pub fn parse(raw_text: &str) -> ScheduleTiming {
    let text = normalize_ws(raw_text);
    let body = strip_affordances(&text);
    if body.is_empty() {
        return ScheduleTiming::Unresolved;
    }

    let Some(caps) = SLOT_RE.captures(body) else {
        logd!("Schedule: no match for {:?}", body);
        return ScheduleTiming::Unresolved;
    };

    let grab = |name: &str| caps.name(name).map(|m| m.as_str().trim()).unwrap_or("");
    let room = caps
        .name("room")
        .map(|m| join_room_parts(m.as_str()))
        .unwrap_or_default();

    ScheduleTiming::Resolved(Slot {
        day: s!(grab("day")),
        start_time: s!(grab("start")),
        end_time: s!(grab("end")),
        building: s!(grab("building")),
        room,
    })
}

/// Remove any number of leading affordance labels (case-insensitive).
fn strip_affordances(text: &str) -> &str {
    let mut rest = text.trim_start();
    'outer: loop {
        for label in AFFORDANCES {
            let hit = rest
                .get(..label.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(label));
            if hit {
                logd!("Schedule: stripped affordance {:?}", label);
                rest = rest[label.len()..].trim_start();
                continue 'outer;
            }
        }
        return rest;
    }
}

/// "Level 2, Murano 3306, 3307" → "Level 2 - Murano 3306 - 3307"
fn join_room_parts(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" - ")
}
