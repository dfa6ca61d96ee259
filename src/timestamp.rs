use {
    crate::{
        epoch::{
            DAY_TICKS, HOUR_TICKS, MINUTE_TICKS, MS_TICKS, SECOND_TICKS, ticks_to_unix_seconds,
            unix_seconds_to_ticks,
        },
        error::ParseResult,
        format::DateFormat,
        source::{SystemClock, TickSource},
    },
    std::ops::{Add, AddAssign, Sub, SubAssign},
};

/// UTC timestamp with 100 nanosecond resolution.
///
/// This is a wrapper around a raw `u64` count of ticks (100ns units) since
/// 1601-01-01 00:00:00 UTC, the Windows FILETIME epoch.
///
/// The zero value is reserved: it is what [`Default`] produces and what the
/// lenient parser returns on failure. Use
/// [`is_initialized()`](Self::is_initialized()) to tell it apart from a real
/// instant.
///
/// Whenever you need the current time, use [`now()`](Self::now()). To move a
/// timestamp, add or subtract a tick delta, typically built with one of the
/// unit helpers such as [`from_seconds()`](Self::from_seconds()). This
/// arithmetic wraps on the underlying `u64`. Subtracting two timestamps
/// yields the difference in whole seconds.
///
/// For text, see [`to_string_with()`](Self::to_string_with()) and
/// [`parse()`](Self::parse()) / [`try_parse()`](Self::try_parse()).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(u64);

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_with(f, DateFormat::Rfc1123)
    }
}

impl From<u64> for Timestamp {
    fn from(ticks: u64) -> Self {
        Self(ticks)
    }
}

impl From<Timestamp> for u64 {
    fn from(ts: Timestamp) -> Self {
        ts.0
    }
}

macro_rules! impl_sub {
    ($lhs:ty, $rhs:ty) => {
        impl Sub<$rhs> for $lhs {
            type Output = i64;

            fn sub(self, rhs: $rhs) -> Self::Output {
                let delta = self.0.wrapping_sub(rhs.0) as i64;
                delta / SECOND_TICKS as i64
            }
        }
    };
}

impl_sub!(Timestamp, Timestamp);
impl_sub!(&Timestamp, &Timestamp);
impl_sub!(Timestamp, &Timestamp);
impl_sub!(&Timestamp, Timestamp);

impl Sub<u64> for Timestamp {
    type Output = Self;

    fn sub(self, ticks: u64) -> Self::Output {
        Timestamp(self.0.wrapping_sub(ticks))
    }
}

impl SubAssign<u64> for Timestamp {
    fn sub_assign(&mut self, ticks: u64) {
        self.0 = self.0.wrapping_sub(ticks);
    }
}

impl Add<u64> for Timestamp {
    type Output = Self;

    fn add(self, ticks: u64) -> Self::Output {
        Timestamp(self.0.wrapping_add(ticks))
    }
}

impl AddAssign<u64> for Timestamp {
    fn add_assign(&mut self, ticks: u64) {
        self.0 = self.0.wrapping_add(ticks);
    }
}

impl Timestamp {
    /// Returns the current UTC time.
    pub fn now() -> Self {
        Self::now_from(&SystemClock)
    }

    /// Returns the current time as reported by `source`.
    pub fn now_from<S: TickSource + ?Sized>(source: &S) -> Self {
        Self(source.current_ticks())
    }

    /// Creates a timestamp from a raw tick count since the FILETIME epoch.
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Creates a timestamp from seconds since the Unix epoch.
    pub fn from_unix_seconds(seconds: u64) -> ParseResult<Self> {
        unix_seconds_to_ticks(seconds).map(Self)
    }

    /// Returns the raw tick count.
    pub const fn to_interval(&self) -> u64 {
        self.0
    }

    /// Returns `false` for the reserved zero value.
    pub const fn is_initialized(&self) -> bool {
        self.0 != 0
    }

    /// Seconds since the Unix epoch.
    ///
    /// Instants before 1970 yield
    /// [`UTC_TIMESTAMP_INVALID`](crate::epoch::UTC_TIMESTAMP_INVALID).
    pub fn utc_timestamp(&self) -> u64 {
        ticks_to_unix_seconds(self.0)
    }

    /// Seconds since the Unix epoch for the current time.
    pub fn utc_now_unix() -> u64 {
        Self::now().utc_timestamp()
    }

    /// Tick count of `ms` milliseconds.
    pub const fn from_milliseconds(ms: u64) -> u64 {
        ms.wrapping_mul(MS_TICKS)
    }

    /// Tick count of `seconds` seconds.
    pub const fn from_seconds(seconds: u64) -> u64 {
        seconds.wrapping_mul(SECOND_TICKS)
    }

    /// Tick count of `minutes` minutes.
    pub const fn from_minutes(minutes: u64) -> u64 {
        minutes.wrapping_mul(MINUTE_TICKS)
    }

    /// Tick count of `hours` hours.
    pub const fn from_hours(hours: u64) -> u64 {
        hours.wrapping_mul(HOUR_TICKS)
    }

    /// Tick count of `days` days.
    pub const fn from_days(days: u64) -> u64 {
        days.wrapping_mul(DAY_TICKS)
    }
}
