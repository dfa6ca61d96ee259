//! Base64 with the RFC 4648 standard alphabet and `=` padding.

use crate::error::{DecodeError, DecodeResult};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: u8 = b'=';

const INVALID: u8 = 0xFF;

/// Reverse lookup from byte to 6-bit value, `INVALID` outside the alphabet.
const DECODE_TABLE: [u8; 256] = {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

#[inline]
fn symbol(value: u32) -> char {
    ALPHABET[(value & 0x3F) as usize] as char
}

/// Encodes `data` as padded base64.
pub fn to_base64(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    let mut chunks = data.chunks_exact(3);
    for chunk in &mut chunks {
        let n = (u32::from(chunk[0]) << 16) | (u32::from(chunk[1]) << 8) | u32::from(chunk[2]);
        out.push(symbol(n >> 18));
        out.push(symbol(n >> 12));
        out.push(symbol(n >> 6));
        out.push(symbol(n));
    }

    match *chunks.remainder() {
        [a] => {
            let n = u32::from(a) << 16;
            out.push(symbol(n >> 18));
            out.push(symbol(n >> 12));
            out.push(PAD as char);
            out.push(PAD as char);
        }
        [a, b] => {
            let n = (u32::from(a) << 16) | (u32::from(b) << 8);
            out.push(symbol(n >> 18));
            out.push(symbol(n >> 12));
            out.push(symbol(n >> 6));
            out.push(PAD as char);
        }
        _ => {}
    }

    out
}

/// Encodes the big-endian bytes of `value` as base64.
///
/// Same output as `to_base64(&value.to_be_bytes())`, without going through a
/// byte buffer. Always 12 characters: two full quartets, then a final quartet
/// carrying the last two bytes and one `=`.
pub fn to_base64_u64(value: u64) -> String {
    let mut out = String::with_capacity(12);

    // Top six bytes, 6 bits at a time.
    for i in 0..8 {
        out.push(symbol((value >> (58 - 6 * i)) as u32));
    }

    // Last two bytes: 6 + 6 + 4 bits, zero filled.
    out.push(symbol((value >> 10) as u32));
    out.push(symbol((value >> 4) as u32));
    out.push(symbol((value << 2) as u32));
    out.push(PAD as char);

    out
}

/// Decodes padded base64 text.
///
/// Input is consumed in quartets, 6 bits per character, and a byte is emitted
/// once 8 bits are available (after the 2nd, 3rd and 4th character of each
/// quartet). `=` may only occupy the last one or two positions of the final
/// quartet; anything else is an error. Bits left over in a padded quartet are
/// discarded.
pub fn from_base64(text: &str) -> DecodeResult<Vec<u8>> {
    let input = text.as_bytes();
    if input.len() % 4 != 0 {
        return Err(DecodeError::InvalidLength(input.len()));
    }

    let last_quartet = input.len().saturating_sub(4);
    let mut out = Vec::with_capacity(input.len() / 4 * 3);
    let mut acc: u32 = 0;
    let mut padded = false;

    for (position, &byte) in input.iter().enumerate() {
        let phase = position % 4;

        if byte == PAD {
            if position < last_quartet || phase < 2 {
                return Err(DecodeError::MisplacedPadding(position));
            }
            padded = true;
            continue;
        }
        if padded {
            return Err(DecodeError::TrailingAfterPadding(position));
        }

        let value = DECODE_TABLE[byte as usize];
        if value == INVALID {
            // Every earlier byte was ASCII, so `position` is a char boundary.
            let symbol = text[position..].chars().next().unwrap_or('\u{FFFD}');
            return Err(DecodeError::InvalidSymbol { symbol, position });
        }

        acc = (acc << 6) | u32::from(value);
        match phase {
            0 => {}
            1 => out.push((acc >> 4) as u8),
            2 => out.push((acc >> 2) as u8),
            _ => {
                out.push(acc as u8);
                acc = 0;
            }
        }
    }

    Ok(out)
}
