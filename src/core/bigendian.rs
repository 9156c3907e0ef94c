//! # Big-endian Identifier Codec
//!
//! Bidirectional transcoding between a 64-bit value and its 8-byte
//! big-endian or 16-character lowercase base16 representation.
//!
//! All operations work on caller-owned regions addressed by a start offset,
//! so identifier formatting never allocates on the hot path: a trace ID made
//! of two 64-bit fields is written as two calls at offsets `0` and `8`
//! (bytes) or appended back to back into one `String` (base16).
//!
//! ## Contract
//! - Byte `i` of the encoding carries bits `[56 - 8*i, 63 - 8*i]` of the value
//! - Base16 output is lowercase only; decoding rejects `A-F` and anything
//!   else outside `[0-9a-f]`, naming the first offending character
//! - Bounds are validated before any byte is written or read
//! - The value is an opaque bit pattern: negative two's-complement patterns
//!   round-trip verbatim (`-1i64 as u64` encodes as `ffffffffffffffff`)

use bytes::BufMut;

use crate::error::{CodecError, Result};

/// Width of an encoded value in bytes
pub const LONG_BYTES: usize = 8;

/// Width of an encoded value in base16 characters (two per byte)
pub const LONG_BASE16: usize = 16;

/// Lowercase base16 alphabet; index with a nibble to get its character
const BASE16_ALPHABET: &[u8; 16] = b"0123456789abcdef";

/// Write the 8 big-endian bytes of `value` into `dest` starting at
/// `dest_offset`.
///
/// Returns [`CodecError::ArrayTooSmall`] when fewer than [`LONG_BYTES`]
/// bytes remain past the offset; nothing is written in that case.
pub fn encode_to_bytes(value: u64, dest: &mut [u8], dest_offset: usize) -> Result<()> {
    let region = dest
        .get_mut(dest_offset..)
        .and_then(|tail| tail.get_mut(..LONG_BYTES))
        .ok_or(CodecError::ArrayTooSmall)?;
    region.copy_from_slice(&value.to_be_bytes());
    Ok(())
}

/// Read 8 bytes from `src` starting at `src_offset` and reassemble them
/// big-endian into a 64-bit value. Inverse of [`encode_to_bytes`].
///
/// Returns [`CodecError::ArrayTooSmall`] when fewer than [`LONG_BYTES`]
/// bytes remain past the offset. The source is never mutated; decoding the
/// same region twice yields identical results.
pub fn decode_from_bytes(src: &[u8], src_offset: usize) -> Result<u64> {
    let region: [u8; LONG_BYTES] = src
        .get(src_offset..)
        .and_then(|tail| tail.get(..LONG_BYTES))
        .and_then(|window| window.try_into().ok())
        .ok_or(CodecError::ArrayTooSmall)?;
    Ok(u64::from_be_bytes(region))
}

/// Append the 8 big-endian bytes of `value` to a growable byte sink.
///
/// Sink-append twin of [`encode_to_bytes`] for callers assembling wire
/// buffers through [`bytes::BufMut`]; capacity is the sink's own contract,
/// so this cannot fail.
pub fn encode_to_buf(value: u64, dest: &mut impl BufMut) {
    dest.put_u64(value);
}

/// Append exactly [`LONG_BASE16`] lowercase hex characters representing
/// `value` to `dest`, most significant byte first, high nibble before low.
///
/// Equivalent to hex-encoding the output of [`encode_to_bytes`]. Values
/// appended consecutively into the same `String` decode independently at
/// offsets `0`, `16`, `32`, ...
pub fn encode_to_base16(value: u64, dest: &mut String) {
    for byte in value.to_be_bytes() {
        byte_to_base16(byte, dest);
    }
}

/// Read [`LONG_BASE16`] characters from `src` starting at character offset
/// `src_offset` and reassemble them big-endian into a 64-bit value.
/// Inverse of [`encode_to_base16`].
///
/// Returns [`CodecError::CharsTooSmall`] when fewer than [`LONG_BASE16`]
/// characters remain past the offset, checked before any decoding. Returns
/// [`CodecError::InvalidCharacter`] naming the first character outside
/// `[0-9a-f]` — uppercase hex is rejected. Either the full value is
/// produced or exactly one error; partial results never escape.
pub fn decode_from_base16(src: &str, src_offset: usize) -> Result<u64> {
    // Offsets count characters, not bytes: the region may hold non-ASCII
    // input that still must be diagnosed per character.
    let available = src.chars().count();
    let in_bounds = src_offset
        .checked_add(LONG_BASE16)
        .is_some_and(|end| end <= available);
    if !in_bounds {
        return Err(CodecError::CharsTooSmall);
    }

    let mut value: u64 = 0;
    for c in src.chars().skip(src_offset).take(LONG_BASE16) {
        value = (value << 4) | u64::from(nibble_from_char(c)?);
    }
    Ok(value)
}

/// Append the two lowercase hex digits of one byte, high nibble first
fn byte_to_base16(byte: u8, dest: &mut String) {
    dest.push(BASE16_ALPHABET[usize::from(byte >> 4)] as char);
    dest.push(BASE16_ALPHABET[usize::from(byte & 0x0f)] as char);
}

/// Map one lowercase hex digit to its nibble; everything else is an error
fn nibble_from_char(c: char) -> Result<u8> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        _ => Err(CodecError::InvalidCharacter(c)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nibble_mapping() {
        assert_eq!(nibble_from_char('0'), Ok(0));
        assert_eq!(nibble_from_char('9'), Ok(9));
        assert_eq!(nibble_from_char('a'), Ok(10));
        assert_eq!(nibble_from_char('f'), Ok(15));
    }

    #[test]
    fn test_nibble_rejects_uppercase_and_others() {
        assert_eq!(nibble_from_char('A'), Err(CodecError::InvalidCharacter('A')));
        assert_eq!(nibble_from_char('F'), Err(CodecError::InvalidCharacter('F')));
        assert_eq!(nibble_from_char('g'), Err(CodecError::InvalidCharacter('g')));
        assert_eq!(nibble_from_char(' '), Err(CodecError::InvalidCharacter(' ')));
        assert_eq!(nibble_from_char('→'), Err(CodecError::InvalidCharacter('→')));
    }

    #[test]
    fn test_byte_to_base16_nibble_order() {
        let mut out = String::new();
        byte_to_base16(0x4e, &mut out);
        assert_eq!(out, "4e");
    }

    #[test]
    fn test_offset_overflow_is_a_size_error() {
        let bytes = [0u8; LONG_BYTES];
        assert_eq!(
            decode_from_bytes(&bytes, usize::MAX),
            Err(CodecError::ArrayTooSmall)
        );
        assert_eq!(
            decode_from_base16("0000000000000000", usize::MAX),
            Err(CodecError::CharsTooSmall)
        );
    }
}
