//! Encoding narrow and wide strings to Modified UTF-8.

use alloc::{vec, vec::Vec};
use core::fmt;

use bstr::BStr;

use crate::unit::CodeUnit;

/// Writes `c` at the start of `out` and returns the number of bytes written.
///
/// Zero is written as `C0 80`. Surrogates are written as ordinary three-byte
/// sequences, so a surrogate pair becomes the six-byte supplementary form.
///
/// # Panics
///
/// If `out` is shorter than the encoding of `c` (see [`CodeUnit::utf8_size`]).
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn write_unit(out: &mut [u8], c: u16) -> usize {
    match c {
        0x0001..=0x007F => {
            out[0] = c as u8;
            1
        }
        0x0000 | 0x0080..=0x07FF => {
            out[..2].copy_from_slice(&[0xC0 | (c >> 6) as u8, 0x80 | (c & 0x3F) as u8]);
            2
        }
        _ => {
            out[..3].copy_from_slice(&[
                0xE0 | (c >> 12) as u8,
                0x80 | ((c >> 6) & 0x3F) as u8,
                0x80 | (c & 0x3F) as u8,
            ]);
            3
        }
    }
}

/// Total encoded length of `units`, not counting a terminator.
#[must_use]
pub fn utf8_length<T: CodeUnit>(units: &[T]) -> usize {
    units.iter().map(|c| c.utf8_size()).sum()
}

/// Sums character sizes but stops before the total would exceed `cap`, so the
/// result always ends on a character boundary.
pub(crate) fn utf8_length_capped<T: CodeUnit>(units: &[T], cap: usize) -> usize {
    let mut total = 0usize;
    for c in units {
        let size = c.utf8_size();
        if total + size > cap {
            #[cfg(feature = "tracing")]
            tracing::debug!(total, cap, "encoded length capped");
            break;
        }
        total += size;
    }
    total
}

/// Encoded length of `units` as an `i32`.
///
/// If the full length would exceed `i32::MAX - 1`, the length of the longest
/// prefix that fits is returned instead, leaving room for a terminator. This
/// is not an error: the string is logically truncated at a character
/// boundary.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn utf8_length_as_int<T: CodeUnit>(units: &[T]) -> i32 {
    utf8_length_capped(units, (i32::MAX - 1) as usize) as i32
}

/// Encodes `units` into `buf` followed by a NUL terminator.
///
/// Encoding stops at the last character whose full encoding still leaves room
/// for the terminator; a multi-byte sequence is never split. Returns the
/// number of bytes written, excluding the terminator.
///
/// # Panics
///
/// If `buf` is empty.
pub fn as_utf8_into<T: CodeUnit>(units: &[T], buf: &mut [u8]) -> usize {
    assert!(!buf.is_empty(), "zero length output buffer");
    let mut pos = 0;
    for &c in units {
        if c.utf8_size() >= buf.len() - pos {
            #[cfg(feature = "tracing")]
            tracing::debug!(written = pos, capacity = buf.len(), "utf8 output truncated");
            break;
        }
        pos += write_unit(&mut buf[pos..], c.to_u16());
    }
    buf[pos] = 0;
    pos
}

/// Encodes `units` into a freshly allocated, exactly sized buffer.
///
/// The length is measured first and the buffer allocated once, so there is no
/// reallocation.
///
/// ```rust
/// let encoded = mutf8::as_utf8(&[0x41u16, 0x0000, 0x20AC]);
/// assert_eq!(encoded.as_bytes(), [0x41, 0xC0, 0x80, 0xE2, 0x82, 0xAC]);
/// assert_eq!(encoded.as_bytes_with_nul().last(), Some(&0));
/// ```
#[must_use]
pub fn as_utf8<T: CodeUnit>(units: &[T]) -> EncodedBuf {
    let len = utf8_length(units);
    let mut bytes = vec![0u8; len + 1];
    let written = as_utf8_into(units, &mut bytes);
    debug_assert_eq!(written, len, "length prediction must be correct");
    EncodedBuf { bytes }
}

/// Encodes every unit of `units` into `out` and appends a NUL terminator.
///
/// Unlike [`as_utf8_into`] this does not truncate: `out` must hold at least
/// `utf8_length(units) + 1` bytes. Returns the number of bytes written,
/// excluding the terminator.
///
/// # Panics
///
/// If `out` is too small.
pub fn convert_to_utf8(units: &[u16], out: &mut [u8]) -> usize {
    let mut pos = 0;
    for &c in units {
        pos += write_unit(&mut out[pos..], c);
    }
    out[pos] = 0;
    pos
}

/// Whether `c` fits in a narrow unit.
#[inline]
#[must_use]
pub fn is_latin1(c: u16) -> bool {
    c <= 0x00FF
}

/// Whether every unit of `units` fits in a narrow unit.
#[must_use]
pub fn is_latin1_units(units: &[u16]) -> bool {
    units.iter().all(|&c| is_latin1(c))
}

/// An owned, NUL-terminated Modified UTF-8 string produced by [`as_utf8`].
#[derive(Clone, PartialEq, Eq)]
pub struct EncodedBuf {
    // Invariant: non-empty and the last byte is the terminator.
    bytes: Vec<u8>,
}

impl EncodedBuf {
    /// Encoded length, excluding the terminator.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether nothing but the terminator is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The encoded bytes without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// The encoded bytes including the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.bytes
    }

    /// The encoded bytes as a byte string, for display.
    #[must_use]
    pub fn as_bstr(&self) -> &BStr {
        BStr::new(self.as_bytes())
    }

    /// Consumes the buffer, dropping the terminator.
    #[must_use]
    pub fn into_bytes(mut self) -> Vec<u8> {
        self.bytes.pop();
        self.bytes
    }
}

impl Default for EncodedBuf {
    fn default() -> Self {
        Self { bytes: vec![0] }
    }
}

impl AsRef<[u8]> for EncodedBuf {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for EncodedBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EncodedBuf").field(&self.as_bstr()).finish()
    }
}
