#![allow(dead_code)]

use tickstr::Timestamp;

// Ticks of 2000-01-01 00:00:00 UTC.
pub const Y2K_TICKS: u64 = 125_911_584_000_000_000;

// First tick past 9999-12-31 23:59:59.9999999 UTC, the end of the range both
// text formats can carry.
pub const END_OF_RANGE_TICKS: u64 = 2_650_467_744_000_000_000;

/// Deterministic source of random test inputs.
pub fn rng() -> fastrand::Rng {
    fastrand::Rng::with_seed(0x5EED_CAFE)
}

/// Random timestamp inside the formattable range, never the zero value.
pub fn random_timestamp(rng: &mut fastrand::Rng) -> Timestamp {
    Timestamp::from_ticks(rng.u64(1..END_OF_RANGE_TICKS))
}

/// Random UTF-16 text without unpaired surrogates.
pub fn random_valid_utf16(rng: &mut fastrand::Rng, len: usize) -> Vec<u16> {
    let text: String = (0..len).map(|_| rng.char(..)).collect();
    text.encode_utf16().collect()
}
