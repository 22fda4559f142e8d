//! 7-bit continuation varint ("packed u32") and its bitset variant.
//!
//! Wire form: little-endian, 7 low bits per byte, high bit set means
//! "more bytes follow". At most 5 bytes are read for a 32-bit payload; a
//! 5th byte's bits above the 32nd are silently discarded on decode.

use crate::error::{WireError, WireResult};

const CONTINUATION: u8 = 0x80;
const MASK: u8 = 0x7f;
const MAX_BYTES: usize = 5;

/// Decode a `u7v` from the front of `buf`, returning the value and the
/// number of bytes consumed.
pub fn decode_u7v(buf: &[u8]) -> WireResult<(u32, usize)> {
    let mut value: u32 = 0;
    for (i, &byte) in buf.iter().enumerate() {
        if i == MAX_BYTES {
            return Err(WireError::OverlongVarint);
        }
        let low7 = (byte & MASK) as u32;
        value |= low7.wrapping_shl((7 * i) as u32);
        if byte & CONTINUATION == 0 {
            return Ok((value, i + 1));
        }
    }
    Err(WireError::TruncatedVarint)
}

/// Encode `value` as a `u7v`, emitting the minimum number of bytes.
pub fn encode_u7v(mut value: u32, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value & MASK as u32) as u8;
        value >>= 7;
        if value != 0 {
            byte |= CONTINUATION;
        }
        out.push(byte);
        if value == 0 {
            break;
        }
    }
}

/// Decode a bitset-varint: a `u7v` whose bits are interpreted as an ordered
/// set of bit positions. Returns the set indices in ascending order.
pub fn decode_bitset(buf: &[u8]) -> WireResult<(Vec<u8>, usize)> {
    let (value, consumed) = decode_u7v(buf)?;
    let mut indices = Vec::new();
    for bit in 0..32u8 {
        if value & (1 << bit) != 0 {
            indices.push(bit);
        }
    }
    Ok((indices, consumed))
}

/// Encode an ordered set of bit positions as a bitset-varint. Duplicate
/// entries OR together harmlessly.
pub fn encode_bitset(indices: &[u8], out: &mut Vec<u8>) {
    let mut value: u32 = 0;
    for &bit in indices {
        value |= 1 << bit;
    }
    encode_u7v(value, out);
}
