use chrono::{DateTime, NaiveDateTime, Utc};

use super::error::TrajectoryError;

/// Parses the OEM epoch layout `YYYY-DDDThh:mm:ss.sssZ`, where `DDD` is
/// the 1-based ordinal day of the year.
pub fn parse_epoch(raw: &str) -> Result<DateTime<Utc>, TrajectoryError> {
    // Pin the 4-digit year and 3-digit ordinal day; chrono's %j would
    // otherwise accept shorter day fields.
    let bytes = raw.as_bytes();
    if bytes.len() != 22 || bytes[4] != b'-' || bytes[8] != b'T' || bytes[21] != b'Z' {
        return Err(TrajectoryError::Format(raw.to_string()));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%jT%H:%M:%S%.3fZ")
        .map(|naive| naive.and_utc())
        .map_err(|_| TrajectoryError::Format(raw.to_string()))
}
