use crate::format::DateFormat;

/// Error produced when decoding base64 text or UTF-8/UTF-16 code units.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    /// Base64 input length is not a multiple of 4.
    #[error("Invalid base64 length: {0} is not a multiple of 4")]
    InvalidLength(usize),

    /// Character outside of the base64 alphabet.
    #[error("Invalid base64 symbol {symbol:?} at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Padding found outside of the last two positions of the final quartet.
    #[error("Misplaced base64 padding at position {0}")]
    MisplacedPadding(usize),

    /// Non-padding character after padding has started.
    #[error("Unexpected base64 symbol after padding at position {0}")]
    TrailingAfterPadding(usize),

    /// Malformed UTF-8 sequence.
    #[error("Invalid UTF-8 sequence at byte {position}")]
    InvalidUtf8 { position: usize },

    /// UTF-8 sequence cut short by the end of input.
    #[error("Truncated UTF-8 sequence at byte {position}")]
    TruncatedUtf8 { position: usize },

    /// Unpaired UTF-16 surrogate where a scalar value is required.
    #[error("Unpaired surrogate {unit:#06x} at index {position}")]
    LoneSurrogate { unit: u16, position: usize },
}

/// Error produced by strict single-byte ingestion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Byte with the high bit set in US-ASCII input.
    #[error("Non-ASCII byte {byte:#04x} at position {position}")]
    NonAscii { byte: u8, position: usize },
}

/// Error produced when parsing or constructing a [`Timestamp`](crate::Timestamp)
/// or parsing a duration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input does not follow the layout of the format.
    #[error("Input does not match the {0} layout")]
    Malformed(DateFormat),

    /// Month abbreviation is not one of the twelve known names.
    #[error("Unknown month name: {0:?}")]
    UnknownMonth(String),

    /// Weekday abbreviation is not one of the seven known names.
    #[error("Unknown weekday name: {0:?}")]
    UnknownWeekday(String),

    /// Field parsed but its value is out of range.
    #[error("Field {field} out of range: {value}")]
    OutOfRange { field: &'static str, value: u32 },

    /// Input maps onto the zero tick value, which is reserved.
    #[error("Instant maps onto the uninitialized timestamp")]
    Uninitialized,

    /// Instant cannot be represented as a tick count.
    #[error("Instant exceeds the tick range: {0} seconds")]
    EpochOverflow(u64),

    /// Input is not a day-time XML Schema duration.
    #[error("Input does not match the PnDTnHnMnS duration layout")]
    MalformedDuration,

    /// Duration does not fit in a `u64` second count.
    #[error("Duration exceeds the u64 second range")]
    DurationOverflow,
}

/// Decoding result type.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Timestamp parsing result type.
pub type ParseResult<T> = Result<T, ParseError>;
