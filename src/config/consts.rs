// src/config/consts.rs

// Reference deployment: 7 venues x 5 days. Both lists are overridable.
pub const VENUES: [&str; 7] = ["Venetian", "Encore", "Aria", "MGM", "Mirage", "Bellagio", "Vdara"];
pub const DAYS: [&str; 5] = ["Mon", "Tue", "Wed", "Thur", "Fri"];

// Schedule normalization
pub const EVENT_YEAR: i32 = 2018;
pub const UTC_OFFSET_MINUTES: i32 = -8 * 60; // Las Vegas, PST
pub const DATETIME_FORMAT: &str = "%b %d %Y %I:%M %p";

// Snapshots: <dir>/<Venue>_<Day>.txt
pub const SNAPSHOT_DIR: &str = "snapshots";
pub const SNAPSHOT_EXT: &str = "txt";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "sessions";
pub const BATCH_FILE_PREFIX: &str = "sessions_";
pub const UNRESOLVED_FILE: &str = "unresolved.txt";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
