//! Time utilities for match metadata and export file names

use chrono::{DateTime, Local, Utc};

/// Timestamp format used in export file names
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Local-time stamp safe for file names, e.g. `2024-05-01_14-03-59`
pub fn file_stamp(at: DateTime<Local>) -> String {
    at.format(FILE_STAMP_FORMAT).to_string()
}

/// Stamp for the current local time
pub fn now_file_stamp() -> String {
    file_stamp(Local::now())
}

/// Whole minutes since `start`, never negative
pub fn elapsed_minutes(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - start).num_minutes().max(0)
}
