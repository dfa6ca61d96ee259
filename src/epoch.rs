use crate::error::{ParseError, ParseResult};

/// Ticks per millisecond (one tick is 100 nanoseconds).
pub const MS_TICKS: u64 = 10_000;

/// Ticks per second.
pub const SECOND_TICKS: u64 = 1_000 * MS_TICKS;

/// Ticks per minute.
pub const MINUTE_TICKS: u64 = 60 * SECOND_TICKS;

/// Ticks per hour.
pub const HOUR_TICKS: u64 = 60 * MINUTE_TICKS;

/// Ticks per day.
pub const DAY_TICKS: u64 = 24 * HOUR_TICKS;

/// Pre-calculated offset between the FILETIME and Unix epochs.
///
/// Seconds from 1601-01-01 00:00:00 UTC to 1970-01-01 00:00:00 UTC.
pub const UNIX_EPOCH_OFFSET_SECS: u64 = 11_644_473_600;

/// Sentinel returned for Unix timestamps of instants before 1970.
pub const UTC_TIMESTAMP_INVALID: u64 = u64::MAX;

/// Converts a tick count since the FILETIME epoch into seconds since the Unix
/// epoch.
///
/// Instants before the Unix epoch yield [`UTC_TIMESTAMP_INVALID`].
pub fn ticks_to_unix_seconds(ticks: u64) -> u64 {
    let seconds = ticks / SECOND_TICKS;
    seconds
        .checked_sub(UNIX_EPOCH_OFFSET_SECS)
        .unwrap_or(UTC_TIMESTAMP_INVALID)
}

/// Converts seconds since the Unix epoch into a tick count since the
/// FILETIME epoch.
pub fn unix_seconds_to_ticks(seconds: u64) -> ParseResult<u64> {
    seconds
        .checked_add(UNIX_EPOCH_OFFSET_SECS)
        .and_then(|s| s.checked_mul(SECOND_TICKS))
        .ok_or(ParseError::EpochOverflow(seconds))
}

/// Converts a Unix timestamp with nanosecond remainder into ticks, dropping
/// the sub-tick part.
///
/// Instants before the FILETIME epoch clamp to zero.
pub(crate) fn unix_parts_to_ticks(seconds: i64, nanos: u32) -> u64 {
    let since_epoch = seconds.saturating_add(UNIX_EPOCH_OFFSET_SECS as i64);
    if since_epoch < 0 {
        return 0;
    }
    (since_epoch as u64)
        .wrapping_mul(SECOND_TICKS)
        .wrapping_add(u64::from(nanos) / 100)
}
