//! Fixed-width primitive readers/writers and length-prefixed byte strings.
//!
//! Modeled on the teacher's `SizedRead`/`SizedWrite` cursor traits: a
//! `Cursor` is a read position plus a borrowed slice, so callers always know
//! how much is left without re-deriving it from `io::Read` error codes.

use crate::error::{WireError, WireResult};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

/// A read cursor over a borrowed byte slice. Every decoder in this crate
/// family takes `&mut Cursor` so that truncation is caught the moment a
/// read runs past the end, rather than by checking lengths by hand at every
/// call site.
pub struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Cursor { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Slice of everything still unread.
    #[inline]
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// A sub-cursor bounded to exactly `len` bytes starting at the current
    /// position, advancing `self` past them.
    pub fn take(&mut self, len: usize) -> WireResult<Cursor<'a>> {
        if self.remaining() < len {
            return Err(WireError::TruncatedFrame);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(Cursor::new(slice))
    }

    pub fn read_u8(&mut self) -> WireResult<u8> {
        if self.is_empty() {
            return Err(WireError::TruncatedFrame);
        }
        let byte = self.data[self.pos];
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_bytes(&mut self, len: usize) -> WireResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(WireError::TruncatedFrame);
        }
        let slice = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub fn read_u16le(&mut self) -> WireResult<u16> {
        let mut bytes = self.read_bytes(2)?;
        Ok(bytes.read_u16::<LittleEndian>()?)
    }

    pub fn read_i16le(&mut self) -> WireResult<i16> {
        let mut bytes = self.read_bytes(2)?;
        Ok(bytes.read_i16::<LittleEndian>()?)
    }

    pub fn read_u32le(&mut self) -> WireResult<u32> {
        let mut bytes = self.read_bytes(4)?;
        Ok(bytes.read_u32::<LittleEndian>()?)
    }

    pub fn read_i32le(&mut self) -> WireResult<i32> {
        let mut bytes = self.read_bytes(4)?;
        Ok(bytes.read_i32::<LittleEndian>()?)
    }

    pub fn read_f32le(&mut self) -> WireResult<f32> {
        let mut bytes = self.read_bytes(4)?;
        Ok(bytes.read_f32::<LittleEndian>()?)
    }

    /// One-byte-length-prefixed byte string.
    pub fn read_short_bytes(&mut self) -> WireResult<&'a [u8]> {
        let len = self.read_u8()? as usize;
        self.read_bytes(len)
    }

    /// One-byte-length-prefixed UTF-8 string.
    pub fn read_short_str(&mut self) -> WireResult<&'a str> {
        std::str::from_utf8(self.read_short_bytes()?).map_err(|_| WireError::InvalidUtf8)
    }

    /// `u7v`-length-prefixed byte string.
    pub fn read_varint_bytes(&mut self) -> WireResult<&'a [u8]> {
        let len = self.read_u7v()? as usize;
        self.read_bytes(len)
    }

    pub fn read_u7v(&mut self) -> WireResult<u32> {
        let (value, consumed) = crate::varint::decode_u7v(self.rest())?;
        self.pos += consumed;
        Ok(value)
    }

    pub fn read_bitset(&mut self) -> WireResult<Vec<u8>> {
        let (indices, consumed) = crate::varint::decode_bitset(self.rest())?;
        self.pos += consumed;
        Ok(indices)
    }
}

/// A single bit-packed status byte, most-significant bit first in
/// declaration order, e.g. `[dead:1, has_voted:1, was_reporter:1,
/// reserved:1, voted_for:4]`.
pub struct BitReader {
    byte: u8,
    next_bit: u8,
}

impl BitReader {
    #[inline]
    pub fn new(byte: u8) -> Self {
        BitReader { byte, next_bit: 8 }
    }

    /// Read `width` bits, most-significant-first, advancing past them.
    pub fn read(&mut self, width: u8) -> u8 {
        debug_assert!(width <= self.next_bit);
        self.next_bit -= width;
        (self.byte >> self.next_bit) & ((1u16 << width) - 1) as u8
    }

    pub fn read_bool(&mut self) -> bool {
        self.read(1) != 0
    }
}

/// Builds a bit-packed status byte, most-significant bit first.
#[derive(Default)]
pub struct BitWriter {
    byte: u8,
    next_bit: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        BitWriter { byte: 0, next_bit: 8 }
    }

    pub fn write(&mut self, width: u8, value: u8) -> &mut Self {
        debug_assert!(width <= self.next_bit);
        self.next_bit -= width;
        self.byte |= (value & ((1u16 << width) - 1) as u8) << self.next_bit;
        self
    }

    pub fn write_bool(&mut self, value: bool) -> &mut Self {
        self.write(1, value as u8)
    }

    pub fn finish(&self) -> u8 {
        self.byte
    }
}

pub fn write_u7v(value: u32, out: &mut Vec<u8>) {
    crate::varint::encode_u7v(value, out)
}

pub fn write_short_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    out.push(bytes.len() as u8);
    out.extend_from_slice(bytes);
}

pub fn write_u16le(value: u16, out: &mut Vec<u8>) {
    out.write_u16::<LittleEndian>(value).expect("writing to Vec is infallible");
}

pub fn write_i16le(value: i16, out: &mut Vec<u8>) {
    out.write_i16::<LittleEndian>(value).expect("writing to Vec is infallible");
}

pub fn write_u32le(value: u32, out: &mut Vec<u8>) {
    out.write_u32::<LittleEndian>(value).expect("writing to Vec is infallible");
}

pub fn write_f32le(value: f32, out: &mut Vec<u8>) {
    out.write_f32::<LittleEndian>(value).expect("writing to Vec is infallible");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_reads_le_primitives_in_order() {
        let data = [0x34, 0x12, 0xff, 0xff, 0x01, 0x00, 0x00, 0x00];
        let mut cur = Cursor::new(&data);
        assert_eq!(cur.read_u16le().unwrap(), 0x1234);
        assert_eq!(cur.read_i16le().unwrap(), -1);
        assert_eq!(cur.read_u32le().unwrap(), 1);
        assert!(cur.is_empty());
    }

    #[test]
    fn cursor_truncation_is_an_error_not_a_panic() {
        let data = [0x01];
        let mut cur = Cursor::new(&data);
        assert!(cur.read_u32le().is_err());
    }

    #[test]
    fn short_prefixed_bytes_round_trip() {
        let mut out = Vec::new();
        write_short_bytes(b"hello", &mut out);
        let mut cur = Cursor::new(&out);
        assert_eq!(cur.read_short_str().unwrap(), "hello");
    }

    #[test]
    fn bit_packed_byte_matches_vote_layout() {
        // [dead:1, has_voted:1, was_reporter:1, reserved:1, voted_for:4]
        let mut w = BitWriter::new();
        w.write_bool(true).write_bool(false).write_bool(true).write(1, 0).write(4, 5);
        let byte = w.finish();
        let mut r = BitReader::new(byte);
        assert!(r.read_bool());
        assert!(!r.read_bool());
        assert!(r.read_bool());
        assert_eq!(r.read(1), 0);
        assert_eq!(r.read(4), 5);
    }
}
