//! RFC 1123 and ISO 8601 text forms of [`Timestamp`].
//!
//! Both formats are UTC only. Calendar fields are derived from the tick count
//! with proleptic Gregorian arithmetic; leap seconds do not exist here.

use {
    crate::{
        epoch::{DAY_TICKS, HOUR_TICKS, MINUTE_TICKS, SECOND_TICKS},
        error::{ParseError, ParseResult},
        locale::DecimalScope,
        timestamp::Timestamp,
    },
    std::{
        fmt::{self, Write},
        str::FromStr,
    },
    tracing::debug,
};

/// Days from 1970-01-01 back to 1601-01-01.
const FILETIME_EPOCH_UNIX_DAYS: i64 = -134_774;

/// Digits of the ISO 8601 fractional second, one tick per unit.
const FRACTION_DIGITS: usize = 7;

const MIN_YEAR: u32 = 1601;
const MAX_YEAR: u32 = 9999;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Supported text layouts for timestamps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `Sat, 01 Jan 2000 00:00:00 GMT`, as used by HTTP `Date` headers.
    #[default]
    Rfc1123,

    /// `2000-01-01T00:00:00.1234567Z`, fraction and `Z` optional on input.
    Iso8601,
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormat::Rfc1123 => f.write_str("RFC 1123"),
            DateFormat::Iso8601 => f.write_str("ISO 8601"),
        }
    }
}

fn is_leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: u32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days since 1970-01-01 of a proleptic Gregorian date.
fn days_from_civil(year: u32, month: u32, day: u32) -> i64 {
    let y = i64::from(year) - i64::from(month <= 2);
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (i64::from(month) + 9) % 12;
    let doy = (153 * mp + 2) / 5 + i64::from(day) - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Proleptic Gregorian `(year, month, day)` of days since 1970-01-01.
fn civil_from_days(days: i64) -> (u32, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year as u32, month as u32, day as u32)
}

/// Broken-down UTC time of a tick count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CivilTime {
    year: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    /// Ticks past the whole second, `0..SECOND_TICKS`.
    fraction: u32,
}

impl CivilTime {
    fn from_ticks(ticks: u64) -> Self {
        let days = ticks / DAY_TICKS;
        let rem = ticks % DAY_TICKS;
        let (year, month, day) = civil_from_days(days as i64 + FILETIME_EPOCH_UNIX_DAYS);
        Self {
            year,
            month,
            day,
            hour: (rem / HOUR_TICKS) as u32,
            minute: (rem % HOUR_TICKS / MINUTE_TICKS) as u32,
            second: (rem % MINUTE_TICKS / SECOND_TICKS) as u32,
            fraction: (rem % SECOND_TICKS) as u32,
        }
    }

    /// Day of week, `0` for Sunday. 1601-01-01 was a Monday.
    fn weekday(ticks: u64) -> usize {
        ((ticks / DAY_TICKS + 1) % 7) as usize
    }

    fn validate(&self) -> ParseResult<()> {
        let check = |field: &'static str, value: u32, min: u32, max: u32| {
            if (min..=max).contains(&value) {
                Ok(())
            } else {
                Err(ParseError::OutOfRange { field, value })
            }
        };

        check("year", self.year, MIN_YEAR, MAX_YEAR)?;
        check("month", self.month, 1, 12)?;
        check("day", self.day, 1, days_in_month(self.year, self.month))?;
        check("hour", self.hour, 0, 23)?;
        check("minute", self.minute, 0, 59)?;
        check("second", self.second, 0, 59)
    }

    /// Tick count since the FILETIME epoch. Fields must be validated.
    fn to_ticks(self) -> u64 {
        let days = days_from_civil(self.year, self.month, self.day) - FILETIME_EPOCH_UNIX_DAYS;
        days as u64 * DAY_TICKS
            + u64::from(self.hour) * HOUR_TICKS
            + u64::from(self.minute) * MINUTE_TICKS
            + u64::from(self.second) * SECOND_TICKS
            + u64::from(self.fraction)
    }
}

/// Byte cursor over timestamp text.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
    format: DateFormat,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, format: DateFormat) -> Self {
        Self {
            bytes: text.as_bytes(),
            pos: 0,
            format,
        }
    }

    fn malformed(&self) -> ParseError {
        ParseError::Malformed(self.format)
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, byte: u8) -> ParseResult<()> {
        if self.peek() == Some(byte) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.malformed())
        }
    }

    /// Consumes `byte` when it is next, reporting whether it was.
    fn accept(&mut self, byte: u8) -> bool {
        let found = self.peek() == Some(byte);
        if found {
            self.pos += 1;
        }
        found
    }

    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let bytes = self.bytes;
        let end = self.pos + n;
        let slice = bytes.get(self.pos..end).ok_or_else(|| self.malformed())?;
        self.pos = end;
        Ok(slice)
    }

    /// Exactly `n` ASCII digits as an unsigned number.
    fn digits(&mut self, n: usize) -> ParseResult<u32> {
        let format = self.format;
        self.take(n)?.iter().try_fold(0u32, |acc, &b| {
            if b.is_ascii_digit() {
                Ok(acc * 10 + u32::from(b - b'0'))
            } else {
                Err(ParseError::Malformed(format))
            }
        })
    }

    fn finish(&self) -> ParseResult<()> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(self.malformed())
        }
    }
}

fn lookup(table: &[&str], name: &[u8]) -> Option<usize> {
    table.iter().position(|entry| entry.as_bytes() == name)
}

fn parse_rfc1123(text: &str) -> ParseResult<CivilTime> {
    let mut cur = Cursor::new(text, DateFormat::Rfc1123);

    // The weekday is redundant with the date; it only has to be a real name.
    let weekday = cur.take(3)?;
    if lookup(&WEEKDAYS, weekday).is_none() {
        return Err(ParseError::UnknownWeekday(
            String::from_utf8_lossy(weekday).into_owned(),
        ));
    }
    cur.expect(b',')?;
    cur.expect(b' ')?;
    let day = cur.digits(2)?;
    cur.expect(b' ')?;
    let month_name = cur.take(3)?;
    let Some(month_index) = lookup(&MONTHS, month_name) else {
        return Err(ParseError::UnknownMonth(
            String::from_utf8_lossy(month_name).into_owned(),
        ));
    };
    let month = month_index as u32 + 1;
    cur.expect(b' ')?;
    let year = cur.digits(4)?;
    cur.expect(b' ')?;
    let hour = cur.digits(2)?;
    cur.expect(b':')?;
    let minute = cur.digits(2)?;
    cur.expect(b':')?;
    let second = cur.digits(2)?;
    cur.expect(b' ')?;
    if cur.take(3)? != b"GMT" {
        return Err(cur.malformed());
    }
    cur.finish()?;

    Ok(CivilTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        fraction: 0,
    })
}

/// Fractional second digits after the `.`, scaled to ticks.
///
/// Digits beyond tick precision are checked and dropped.
fn parse_fraction(cur: &mut Cursor<'_>) -> ParseResult<u32> {
    let _scope = DecimalScope::acquire();

    let start = cur.pos;
    let mut fraction = 0u32;
    while let Some(b) = cur.peek().filter(u8::is_ascii_digit) {
        if cur.pos - start < FRACTION_DIGITS {
            fraction = fraction * 10 + u32::from(b - b'0');
        }
        cur.pos += 1;
    }

    let count = cur.pos - start;
    if count == 0 {
        return Err(cur.malformed());
    }
    for _ in count..FRACTION_DIGITS {
        fraction *= 10;
    }
    Ok(fraction)
}

fn parse_iso8601(text: &str) -> ParseResult<CivilTime> {
    let mut cur = Cursor::new(text, DateFormat::Iso8601);

    let year = cur.digits(4)?;
    cur.expect(b'-')?;
    let month = cur.digits(2)?;
    cur.expect(b'-')?;
    let day = cur.digits(2)?;
    cur.expect(b'T')?;
    let hour = cur.digits(2)?;
    cur.expect(b':')?;
    let minute = cur.digits(2)?;
    cur.expect(b':')?;
    let second = cur.digits(2)?;
    let fraction = if cur.accept(b'.') {
        parse_fraction(&mut cur)?
    } else {
        0
    };
    cur.accept(b'Z');
    cur.finish()?;

    Ok(CivilTime {
        year,
        month,
        day,
        hour,
        minute,
        second,
        fraction,
    })
}

/// Renders a [`Timestamp`] in a fixed layout.
struct Formatted {
    ts: Timestamp,
    format: DateFormat,
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.ts.write_with(f, self.format)
    }
}

impl Timestamp {
    /// Formats the timestamp in the given layout.
    ///
    /// RFC 1123 drops sub-second ticks. ISO 8601 appends a 7-digit fraction
    /// only when the sub-second part is non-zero.
    pub fn to_string_with(&self, format: DateFormat) -> String {
        Formatted { ts: *self, format }.to_string()
    }

    pub(crate) fn write_with<W: Write + ?Sized>(
        &self,
        out: &mut W,
        format: DateFormat,
    ) -> fmt::Result {
        let ticks = self.to_interval();
        let c = CivilTime::from_ticks(ticks);

        match format {
            DateFormat::Rfc1123 => write!(
                out,
                "{}, {:02} {} {:04} {:02}:{:02}:{:02} GMT",
                WEEKDAYS[CivilTime::weekday(ticks)],
                c.day,
                MONTHS[(c.month - 1) as usize],
                c.year,
                c.hour,
                c.minute,
                c.second
            ),
            DateFormat::Iso8601 => {
                write!(
                    out,
                    "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
                    c.year, c.month, c.day, c.hour, c.minute, c.second
                )?;
                if c.fraction != 0 {
                    let _scope = DecimalScope::acquire();
                    write!(out, ".{:0width$}", c.fraction, width = FRACTION_DIGITS)?;
                }
                out.write_char('Z')
            }
        }
    }

    /// Parses `text` in the given layout.
    ///
    /// Fields are range checked (day against the length of its month) and
    /// years are limited to 1601..=9999. Text that lands on the reserved zero
    /// tick value is rejected with [`ParseError::Uninitialized`].
    pub fn try_parse(text: &str, format: DateFormat) -> ParseResult<Self> {
        let civil = match format {
            DateFormat::Rfc1123 => parse_rfc1123(text)?,
            DateFormat::Iso8601 => parse_iso8601(text)?,
        };
        civil.validate()?;

        let ts = Timestamp::from_ticks(civil.to_ticks());
        if !ts.is_initialized() {
            return Err(ParseError::Uninitialized);
        }
        Ok(ts)
    }

    /// Parses `text` in the given layout, returning the zero timestamp on
    /// failure.
    ///
    /// Callers must check [`is_initialized()`](Self::is_initialized()) on
    /// the result; use [`try_parse()`](Self::try_parse()) to get the reason.
    pub fn parse(text: &str, format: DateFormat) -> Self {
        Self::try_parse(text, format).unwrap_or_else(|error| {
            debug!(input = text, %format, %error, "Unparsable timestamp, using zero value");
            Self::default()
        })
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    /// Accepts either layout, RFC 1123 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s, DateFormat::Rfc1123).or_else(|_| Self::try_parse(s, DateFormat::Iso8601))
    }
}
