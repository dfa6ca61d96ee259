//! XML Schema `duration` text for whole-second intervals.
//!
//! Only the day and time components (`PnDTnHnMnS`) are produced and accepted.
//! Years and months have no fixed length in seconds and are rejected.

use {
    crate::error::{ParseError, ParseResult},
    tracing::debug,
};

const MINUTE_SECS: u64 = 60;
const HOUR_SECS: u64 = 60 * MINUTE_SECS;
const DAY_SECS: u64 = 24 * HOUR_SECS;

/// Renders `seconds` as a normalized duration, e.g. `P1DT2H3M4S`.
///
/// Zero components are omitted, the `T` only appears with a time component,
/// and zero renders as `PT0S`.
pub fn seconds_to_xml_duration(seconds: u64) -> String {
    if seconds == 0 {
        return String::from("PT0S");
    }

    let days = seconds / DAY_SECS;
    let rest = seconds % DAY_SECS;
    let time = [
        (rest / HOUR_SECS, 'H'),
        (rest % HOUR_SECS / MINUTE_SECS, 'M'),
        (rest % MINUTE_SECS, 'S'),
    ];

    let mut out = String::from("P");
    if days > 0 {
        out.push_str(&days.to_string());
        out.push('D');
    }
    if rest > 0 {
        out.push('T');
        for (value, designator) in time.into_iter().filter(|&(value, _)| value > 0) {
            out.push_str(&value.to_string());
            out.push(designator);
        }
    }
    out
}

/// Parses a day-time duration into whole seconds.
///
/// Components need not be normalized (`PT90M` is 5400). A fractional second
/// is accepted and truncated.
pub fn try_xml_duration_to_seconds(text: &str) -> ParseResult<u64> {
    let body = text.strip_prefix('P').ok_or(ParseError::MalformedDuration)?;
    let (date, time) = match body.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (body, None),
    };
    if date.is_empty() && time.is_none() {
        return Err(ParseError::MalformedDuration);
    }

    let mut total = 0;
    if !date.is_empty() {
        let days = date.strip_suffix('D').ok_or(ParseError::MalformedDuration)?;
        total = accumulate(total, days, DAY_SECS)?;
    }

    if let Some(mut time) = time {
        if time.is_empty() {
            return Err(ParseError::MalformedDuration);
        }
        for (designator, unit) in [('H', HOUR_SECS), ('M', MINUTE_SECS)] {
            if let Some((value, rest)) = component(time, designator) {
                total = accumulate(total, value, unit)?;
                time = rest;
            }
        }
        if !time.is_empty() {
            let value = time.strip_suffix('S').ok_or(ParseError::MalformedDuration)?;
            let whole = match value.split_once('.') {
                Some((whole, fraction)) if is_digits(fraction) => whole,
                Some(_) => return Err(ParseError::MalformedDuration),
                None => value,
            };
            total = accumulate(total, whole, 1)?;
        }
    }
    Ok(total)
}

/// Parses a day-time duration, returning 0 on failure.
///
/// Use [`try_xml_duration_to_seconds()`] to tell a zero duration from
/// unparsable text.
pub fn xml_duration_to_seconds(text: &str) -> u64 {
    try_xml_duration_to_seconds(text).unwrap_or_else(|error| {
        debug!(input = text, %error, "Unparsable duration, using zero");
        0
    })
}

/// Splits `<digits><designator>` off the front of `text`.
fn component(text: &str, designator: char) -> Option<(&str, &str)> {
    let end = text.find(|c: char| !c.is_ascii_digit())?;
    let rest = text[end..].strip_prefix(designator)?;
    Some((&text[..end], rest))
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn accumulate(total: u64, digits: &str, unit: u64) -> ParseResult<u64> {
    if !is_digits(digits) {
        return Err(ParseError::MalformedDuration);
    }
    digits
        .parse::<u64>()
        .ok()
        .and_then(|value| value.checked_mul(unit))
        .and_then(|secs| total.checked_add(secs))
        .ok_or(ParseError::DurationOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_duration() {
        assert_eq!(seconds_to_xml_duration(0), "PT0S");
        assert_eq!(try_xml_duration_to_seconds("PT0S"), Ok(0));
        assert_eq!(try_xml_duration_to_seconds("P0D"), Ok(0));
    }

    #[test]
    fn renders_components() {
        let cases = [
            (1, "PT1S"),
            (59, "PT59S"),
            (60, "PT1M"),
            (61, "PT1M1S"),
            (3600, "PT1H"),
            (3601, "PT1H1S"),
            (5400, "PT1H30M"),
            (86_400, "P1D"),
            (86_460, "P1DT1M"),
            (90_061, "P1DT1H1M1S"),
            (10 * 86_400 + 23 * 3600 + 59 * 60 + 59, "P10DT23H59M59S"),
        ];
        for (seconds, text) in cases {
            assert_eq!(seconds_to_xml_duration(seconds), text);
            assert_eq!(try_xml_duration_to_seconds(text), Ok(seconds), "{text}");
        }
    }

    #[test]
    fn round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x5EED);
        let samples = (0..1000).map(|_| rng.u64(..)).chain([u64::MAX, DAY_SECS - 1]);
        for seconds in samples {
            let text = seconds_to_xml_duration(seconds);
            assert_eq!(xml_duration_to_seconds(&text), seconds, "{text}");
        }
    }

    #[test]
    fn accepts_unnormalized_components() {
        assert_eq!(xml_duration_to_seconds("PT90M"), 5400);
        assert_eq!(xml_duration_to_seconds("PT3600S"), 3600);
        assert_eq!(xml_duration_to_seconds("PT25H"), 90_000);
        assert_eq!(xml_duration_to_seconds("P2DT0H"), 172_800);
        assert_eq!(xml_duration_to_seconds("P1DT0H0M0S"), 86_400);
        assert_eq!(xml_duration_to_seconds("PT1.75S"), 1);
        assert_eq!(xml_duration_to_seconds("PT2M0.5S"), 120);
    }

    #[test]
    fn malformed_input() {
        let cases = [
            "", "P", "PT", "P1DT", "5S", "T5S", "pt5s", "PT5", "PT-1S", "PT+1S", "P1H", "P1M",
            "P1Y", "PT1S1M", "PT1H1H", "P1D2D", "PTH", "PT.5S", "PT1.S", "PT1.5xS", " PT1S",
            "PT1S ",
        ];
        for text in cases {
            assert_eq!(
                try_xml_duration_to_seconds(text),
                Err(ParseError::MalformedDuration),
                "{text:?}"
            );
            assert_eq!(xml_duration_to_seconds(text), 0, "{text:?}");
        }
    }

    #[test]
    fn overflow() {
        let max_days = u64::MAX / DAY_SECS;
        assert!(try_xml_duration_to_seconds(&format!("P{max_days}D")).is_ok());
        for text in [
            format!("P{}D", max_days + 1),
            "PT18446744073709551616S".to_string(),
            format!("P{max_days}DT23H59M59S"),
        ] {
            assert_eq!(
                try_xml_duration_to_seconds(&text),
                Err(ParseError::DurationOverflow),
                "{text}"
            );
            assert_eq!(xml_duration_to_seconds(&text), 0);
        }
    }
}
