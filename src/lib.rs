//! Text and time primitives for network service clients.
//!
//! - [`transcode`]: UTF-16 to UTF-8 and back, keeping unpaired surrogates
//!   intact, plus Latin-1 and US-ASCII ingestion.
//! - [`base64`]: RFC 4648 base64 with padding.
//! - [`Timestamp`]: 100ns ticks since 1601-01-01 UTC, with RFC 1123 and
//!   ISO 8601 text forms.
//! - [`timespan`]: XML Schema durations (`PnDTnHnMnS`) for second counts.
//! - [`NonceGenerator`]: alphanumeric nonces (not cryptographically secure).
//!
//! ```
//! use tickstr::{DateFormat, Timestamp};
//!
//! let ts = Timestamp::parse("Sat, 01 Jan 2000 00:00:00 GMT", DateFormat::Rfc1123);
//! assert!(ts.is_initialized());
//!
//! let later = ts + Timestamp::from_minutes(90);
//! assert_eq!(later - ts, 5400);
//! assert_eq!(later.to_string_with(DateFormat::Iso8601), "2000-01-01T01:30:00Z");
//! ```

pub mod base64;
pub mod epoch;
pub mod error;
pub mod format;
pub mod locale;
pub mod nonce;
pub mod source;
pub mod text;
mod timestamp;
pub mod timespan;
pub mod transcode;

pub use {
    base64::{from_base64, to_base64, to_base64_u64},
    error::{DecodeError, EncodingError, ParseError},
    format::DateFormat,
    locale::DecimalScope,
    nonce::NonceGenerator,
    source::{ManualClock, SystemClock, TickSource},
    timespan::{seconds_to_xml_duration, xml_duration_to_seconds},
    timestamp::Timestamp,
    transcode::{latin1_to_utf8, usascii_to_utf16, utf8_to_utf16, utf16_to_utf8},
};
