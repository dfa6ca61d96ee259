//! Conversions between UTF-16 code units, UTF-8 bytes and single-byte
//! encodings.
//!
//! UTF-16 input may be ill-formed. An unpaired surrogate is written as its own
//! three byte sequence (the WTF-8 convention) instead of being rejected or
//! replaced, and [`utf8_to_utf16`] accepts those sequences back, so any `u16`
//! sequence survives a round trip through bytes unchanged.
//!
//! Decoding of UTF-8 is strict: malformed, overlong or out-of-range sequences
//! produce a [`DecodeError`] and nothing is substituted.

use crate::error::{DecodeError, DecodeResult, EncodingError};

const HIGH_SURROGATE_START: u16 = 0xD800;
const LOW_SURROGATE_START: u16 = 0xDC00;
const SURROGATE_END: u16 = 0xDFFF;
const SUPPLEMENTARY_START: u32 = 0x1_0000;

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_START..LOW_SURROGATE_START).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_START..=SURROGATE_END).contains(&unit)
}

/// Appends the UTF-8 form of `cp` to `out`.
///
/// Surrogate code points take the regular three byte layout.
#[inline]
fn push_utf8(cp: u32, out: &mut Vec<u8>) {
    match cp {
        0..=0x7F => out.push(cp as u8),
        0x80..=0x7FF => {
            out.push(0xC0 | (cp >> 6) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        0x800..=0xFFFF => {
            out.push(0xE0 | (cp >> 12) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
        _ => {
            out.push(0xF0 | (cp >> 18) as u8);
            out.push(0x80 | ((cp >> 12) & 0x3F) as u8);
            out.push(0x80 | ((cp >> 6) & 0x3F) as u8);
            out.push(0x80 | (cp & 0x3F) as u8);
        }
    }
}

/// Appends the UTF-16 form of `cp` to `out`.
#[inline]
fn push_utf16(cp: u32, out: &mut Vec<u16>) {
    if cp < SUPPLEMENTARY_START {
        out.push(cp as u16);
    } else {
        let v = cp - SUPPLEMENTARY_START;
        out.push(HIGH_SURROGATE_START | (v >> 10) as u16);
        out.push(LOW_SURROGATE_START | (v & 0x3FF) as u16);
    }
}

/// Converts UTF-16 code units to UTF-8 bytes.
///
/// Never fails. Surrogate pairs become four byte sequences; an unpaired
/// surrogate becomes a three byte sequence encoding its own value, so the
/// output is only valid UTF-8 when the input is valid UTF-16.
pub fn utf16_to_utf8(units: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(units.len() + units.len() / 2);
    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        i += 1;

        let cp = match units.get(i) {
            Some(&low) if is_high_surrogate(unit) && is_low_surrogate(low) => {
                i += 1;
                SUPPLEMENTARY_START
                    + ((u32::from(unit - HIGH_SURROGATE_START) << 10)
                        | u32::from(low - LOW_SURROGATE_START))
            }
            _ => u32::from(unit),
        };
        push_utf8(cp, &mut out);
    }
    out
}

/// Converts UTF-16 code units to a `String`, rejecting unpaired surrogates.
pub fn utf16_to_string(units: &[u16]) -> DecodeResult<String> {
    let mut out = String::with_capacity(units.len());
    let mut position = 0;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(ch) => {
                position += ch.len_utf16();
                out.push(ch);
            }
            Err(e) => {
                return Err(DecodeError::LoneSurrogate {
                    unit: e.unpaired_surrogate(),
                    position,
                });
            }
        }
    }
    Ok(out)
}

/// Converts a string slice to UTF-16 code units.
pub fn str_to_utf16(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

/// Converts UTF-8 bytes to UTF-16 code units.
///
/// Three byte encodings of surrogate code points are accepted and yield the
/// surrogate unit itself, which makes this the inverse of [`utf16_to_utf8`].
/// A high surrogate sequence directly followed by a low surrogate sequence is
/// rejected, since that pair has a four byte form. Anything else that is not
/// well-formed UTF-8 is an error too: stray continuation bytes, overlong
/// forms, code points above U+10FFFF and sequences cut short by the end of
/// input.
pub fn utf8_to_utf16(bytes: &[u8]) -> DecodeResult<Vec<u16>> {
    let mut out = Vec::with_capacity(bytes.len());
    let mut after_high_surrogate = false;
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        if lead < 0x80 {
            out.push(u16::from(lead));
            after_high_surrogate = false;
            i += 1;
            continue;
        }

        // Sequence length, initial code point bits and the valid range of the
        // second byte (narrowed to exclude overlong and out-of-range forms).
        let (len, bits, second) = match lead {
            0xC2..=0xDF => (2, u32::from(lead & 0x1F), 0x80..=0xBF),
            0xE0 => (3, 0, 0xA0..=0xBF),
            0xE1..=0xEF => (3, u32::from(lead & 0x0F), 0x80..=0xBF),
            0xF0 => (4, 0, 0x90..=0xBF),
            0xF1..=0xF3 => (4, u32::from(lead & 0x07), 0x80..=0xBF),
            0xF4 => (4, 4, 0x80..=0x8F),
            _ => return Err(DecodeError::InvalidUtf8 { position: i }),
        };

        let mut cp = bits;
        for k in 1..len {
            let Some(&byte) = bytes.get(i + k) else {
                return Err(DecodeError::TruncatedUtf8 { position: i });
            };
            let valid = if k == 1 {
                second.contains(&byte)
            } else {
                (0x80..=0xBF).contains(&byte)
            };
            if !valid {
                return Err(DecodeError::InvalidUtf8 { position: i + k });
            }
            cp = (cp << 6) | u32::from(byte & 0x3F);
        }

        let bmp = u16::try_from(cp).ok();
        if after_high_surrogate && bmp.is_some_and(is_low_surrogate) {
            return Err(DecodeError::InvalidUtf8 { position: i });
        }
        after_high_surrogate = bmp.is_some_and(is_high_surrogate);

        push_utf16(cp, &mut out);
        i += len;
    }
    Ok(out)
}

/// Converts US-ASCII bytes to UTF-16 code units.
///
/// The first byte with the high bit set is reported as an error.
pub fn usascii_to_utf16(bytes: &[u8]) -> Result<Vec<u16>, EncodingError> {
    bytes
        .iter()
        .enumerate()
        .map(|(position, &byte)| {
            if byte.is_ascii() {
                Ok(u16::from(byte))
            } else {
                Err(EncodingError::NonAscii { byte, position })
            }
        })
        .collect()
}

/// Converts Latin-1 (ISO 8859-1) bytes to a UTF-8 string.
pub fn latin1_to_utf8(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Converts Latin-1 (ISO 8859-1) bytes to UTF-16 code units.
pub fn latin1_to_utf16(bytes: &[u8]) -> Vec<u16> {
    bytes.iter().map(|&b| u16::from(b)).collect()
}
