mod common;

use {
    chrono::{TimeZone, Utc},
    common::{END_OF_RANGE_TICKS, Y2K_TICKS, random_timestamp, rng},
    std::{sync::Arc, time::Duration},
    tickstr::{
        DateFormat, ManualClock, ParseError, Timestamp,
        epoch::{SECOND_TICKS, UNIX_EPOCH_OFFSET_SECS},
    },
};

#[test]
fn now_tracks_the_system_clock() {
    let before = Utc::now().timestamp();

    // Wait for a short duration to ensure the seconds differ.
    std::thread::sleep(Duration::from_millis(1100));

    let now = Timestamp::now();
    assert!(now.is_initialized());

    let unix = now.utc_timestamp() as i64;
    assert!(unix - before >= 1);
    assert!(unix - before <= 3);
}

#[test]
fn zero_value_is_not_initialized() {
    let zero = Timestamp::from_ticks(0);
    assert!(!zero.is_initialized());
    assert_eq!(zero, Timestamp::default());
    assert_eq!(zero.to_string_with(DateFormat::Rfc1123), "Mon, 01 Jan 1601 00:00:00 GMT");
    assert_eq!(zero.to_string_with(DateFormat::Iso8601), "1601-01-01T00:00:00Z");
}

#[test]
fn rfc1123_scenario() {
    let text = "Sat, 01 Jan 2000 00:00:00 GMT";
    let ts = Timestamp::parse(text, DateFormat::Rfc1123);
    assert_eq!(ts.to_interval(), Y2K_TICKS);
    assert_eq!(ts.to_string_with(DateFormat::Rfc1123), text);
}

#[test]
fn iso8601_variants() {
    let base = Timestamp::from_ticks(Y2K_TICKS);
    let cases = [
        ("2000-01-01T00:00:00Z", 0),
        ("2000-01-01T00:00:00", 0),
        ("2000-01-01T00:00:00.0000000Z", 0),
        ("2000-01-01T00:00:00.5Z", 5_000_000),
        ("2000-01-01T00:00:00.1234567Z", 1_234_567),
        ("2000-01-01T00:00:00.1234567", 1_234_567),
        ("2000-01-01T00:00:00.123456789Z", 1_234_567),
    ];
    for (text, ticks) in cases {
        assert_eq!(Timestamp::parse(text, DateFormat::Iso8601), base + ticks, "{text}");
    }

    assert_eq!(base.to_string_with(DateFormat::Iso8601), "2000-01-01T00:00:00Z");
    assert_eq!(
        (base + 1).to_string_with(DateFormat::Iso8601),
        "2000-01-01T00:00:00.0000001Z"
    );
    assert_eq!(
        (base + 5_000_000).to_string_with(DateFormat::Iso8601),
        "2000-01-01T00:00:00.5000000Z"
    );
}

#[test]
fn month_out_of_range_is_zero() {
    let ts = Timestamp::parse("2000-13-01T00:00:00Z", DateFormat::Iso8601);
    assert!(!ts.is_initialized());
    assert_eq!(
        Timestamp::try_parse("2000-13-01T00:00:00Z", DateFormat::Iso8601),
        Err(ParseError::OutOfRange {
            field: "month",
            value: 13
        })
    );
}

#[test]
fn malformed_input_is_zero() {
    let rfc = [
        "",
        "Sat, 01 Jan 2000 00:00:00",
        "Sat, 01 Jan 2000 00:00:00 UTC",
        "Sat, 01 Jan 2000 00:00:00 GMT ",
        "Sat, 1 Jan 2000 00:00:00 GMT",
        "Sat 01 Jan 2000 00:00:00 GMT",
        "Sat, 01 Jan 00 00:00:00 GMT",
        "Sat, 01 Jan 2000 0:00:00 GMT",
        "Sat, 01 January 2000 00:00:00 GMT",
        "Sat, 31 Feb 2000 00:00:00 GMT",
        "Sat, 01 Jan 2000 25:00:00 GMT",
        "2000-01-01T00:00:00Z",
    ];
    for text in rfc {
        assert!(
            !Timestamp::parse(text, DateFormat::Rfc1123).is_initialized(),
            "{text:?}"
        );
    }

    let iso = [
        "",
        "2000-01-01",
        "2000-01-01 00:00:00Z",
        "-2000-01-01T00:00:00Z",
        "2000-1-01T00:00:00Z",
        "2000-01-01T00:00:00.Z",
        "2000-01-01T00:00:00ZZ",
        "2000-01-01T00:00:00+01:00",
        "2000-01-01T00:00:00.12a",
        "2000-02-30T00:00:00Z",
        "10000-01-01T00:00:00Z",
        "Sat, 01 Jan 2000 00:00:00 GMT",
    ];
    for text in iso {
        assert!(
            !Timestamp::parse(text, DateFormat::Iso8601).is_initialized(),
            "{text:?}"
        );
    }
}

#[test]
fn weekday_is_not_cross_checked() {
    let ts = Timestamp::parse("Mon, 01 Jan 2000 00:00:00 GMT", DateFormat::Rfc1123);
    assert_eq!(ts.to_interval(), Y2K_TICKS);
    assert_eq!(ts.to_string(), "Sat, 01 Jan 2000 00:00:00 GMT");
}

#[test]
fn format_round_trip() {
    let mut rng = rng();
    for _ in 0..2_000 {
        let ts = random_timestamp(&mut rng);

        let iso = ts.to_string_with(DateFormat::Iso8601);
        assert_eq!(Timestamp::parse(&iso, DateFormat::Iso8601), ts, "{iso}");

        // RFC 1123 only carries whole seconds.
        let whole = Timestamp::from_ticks(ts.to_interval() / SECOND_TICKS * SECOND_TICKS);
        if !whole.is_initialized() {
            continue;
        }
        let rfc = ts.to_string_with(DateFormat::Rfc1123);
        assert_eq!(Timestamp::parse(&rfc, DateFormat::Rfc1123), whole, "{rfc}");
    }
}

#[test]
fn range_edges() {
    let last = Timestamp::from_ticks(END_OF_RANGE_TICKS - 1);
    assert_eq!(
        last.to_string_with(DateFormat::Iso8601),
        "9999-12-31T23:59:59.9999999Z"
    );
    assert_eq!(last.to_string(), "Fri, 31 Dec 9999 23:59:59 GMT");
    assert_eq!(Timestamp::parse("9999-12-31T23:59:59.9999999Z", DateFormat::Iso8601), last);
}

#[test]
fn formatting_matches_chrono() {
    let mut rng = rng();
    for _ in 0..500 {
        let ts = random_timestamp(&mut rng);
        let unix = (ts.to_interval() / SECOND_TICKS) as i64 - UNIX_EPOCH_OFFSET_SECS as i64;
        let expected = Utc.timestamp_opt(unix, 0).unwrap();

        assert_eq!(
            ts.to_string_with(DateFormat::Rfc1123),
            expected.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
        );
        assert!(
            ts.to_string_with(DateFormat::Iso8601)
                .starts_with(&expected.format("%Y-%m-%dT%H:%M:%S").to_string())
        );
    }
}

#[test]
fn seconds_difference() {
    let mut rng = rng();
    for _ in 0..1_000 {
        let t = random_timestamp(&mut rng);
        assert_eq!((t + Timestamp::from_seconds(5)) - t, 5);
        assert_eq!(t - (t + Timestamp::from_seconds(5)), -5);
    }

    let clock = ManualClock::new(Y2K_TICKS);
    let start = Timestamp::now_from(&clock);
    clock.advance(Timestamp::from_days(1) + Timestamp::from_hours(1));
    assert_eq!(Timestamp::now_from(&clock) - start, 90_000);
}

#[test]
fn lenient_parse_logs_failure() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();

    assert_eq!(
        Timestamp::parse("not a date", DateFormat::Rfc1123),
        Timestamp::default()
    );
}

#[test]
fn concurrent_format_and_parse() {
    let samples: Arc<Vec<Timestamp>> = {
        let mut rng = rng();
        Arc::new((0..200).map(|_| random_timestamp(&mut rng)).collect())
    };

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let samples = Arc::clone(&samples);
            std::thread::spawn(move || {
                let format = if t % 2 == 0 {
                    DateFormat::Iso8601
                } else {
                    DateFormat::Rfc1123
                };
                for ts in samples.iter() {
                    let text = ts.to_string_with(format);
                    let parsed = Timestamp::parse(&text, format);
                    assert_eq!(parsed.to_string_with(format), text);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}
