//! One-character decoding.
//!
//! These routines assume the input has usually been checked by
//! [`is_legal_utf8`](crate::is_legal_utf8) already; they are not the legality
//! gate. On malformed input they still make progress: the offending byte is
//! returned as [`Decoded::Invalid`] and exactly one byte is consumed.

use crate::unit::CodeUnit;

/// Result of decoding one character from the front of a byte slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoded {
    /// A well-formed 1, 2 or 3 byte sequence.
    Char {
        /// The decoded code unit.
        value: u16,
        /// Bytes consumed, 1 to 3.
        len: usize,
    },
    /// The first byte does not start a well-formed sequence. Decoding
    /// continues with the following byte.
    Invalid(u8),
}

impl Decoded {
    /// The decoded code unit, or the raw byte for [`Decoded::Invalid`].
    #[inline]
    #[must_use]
    pub fn value(self) -> u16 {
        match self {
            Decoded::Char { value, .. } => value,
            Decoded::Invalid(byte) => u16::from(byte),
        }
    }

    /// Number of input bytes this character consumed.
    #[inline]
    #[must_use]
    pub fn byte_len(self) -> usize {
        match self {
            Decoded::Char { len, .. } => len,
            Decoded::Invalid(_) => 1,
        }
    }

    /// Whether the bytes formed a well-formed sequence.
    #[inline]
    #[must_use]
    pub fn is_valid(self) -> bool {
        matches!(self, Decoded::Char { .. })
    }
}

#[inline]
pub(crate) fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

/// Decodes the character at the front of `bytes`.
///
/// Returns `None` only when `bytes` is empty. A sequence that runs past the
/// end of the slice is reported as [`Decoded::Invalid`].
#[inline]
#[must_use]
pub fn next(bytes: &[u8]) -> Option<Decoded> {
    let &ch = bytes.first()?;
    let decoded = match ch >> 4 {
        0x8..=0xB | 0xF => Decoded::Invalid(ch),
        // 110xxxxx 10xxxxxx
        0xC | 0xD => match bytes.get(1) {
            Some(&ch2) if is_continuation(ch2) => Decoded::Char {
                value: (u16::from(ch & 0x1F) << 6) | u16::from(ch2 & 0x3F),
                len: 2,
            },
            _ => Decoded::Invalid(ch),
        },
        // 1110xxxx 10xxxxxx 10xxxxxx
        0xE => match (bytes.get(1), bytes.get(2)) {
            (Some(&ch2), Some(&ch3)) if is_continuation(ch2) && is_continuation(ch3) => {
                Decoded::Char {
                    value: (u16::from(ch & 0x0F) << 12)
                        | (u16::from(ch2 & 0x3F) << 6)
                        | u16::from(ch3 & 0x3F),
                    len: 3,
                }
            }
            _ => Decoded::Invalid(ch),
        },
        _ => Decoded::Char {
            value: u16::from(ch),
            len: 1,
        },
    };
    Some(decoded)
}

/// Decodes one character into `out` and returns the rest of the input.
///
/// Narrow outputs keep only the low eight bits of the decoded value. If
/// `bytes` is empty, `out` is left untouched.
#[inline]
pub fn next_unit<'a, T: CodeUnit>(bytes: &'a [u8], out: &mut T) -> &'a [u8] {
    match next(bytes) {
        Some(decoded) => {
            *out = T::from_decoded(decoded.value());
            &bytes[decoded.byte_len()..]
        }
        None => bytes,
    }
}

/// Whether `bytes` starts with a six-byte surrogate pair:
/// `11101101 1010xxxx 10xxxxxx 11101101 1011xxxx 10xxxxxx`.
#[inline]
#[must_use]
pub fn is_supplementary_character(bytes: &[u8]) -> bool {
    matches!(
        bytes.first_chunk::<6>(),
        Some([0xED, b1, b2, 0xED, b4, b5])
            if b1 & 0xF0 == 0xA0 && is_continuation(*b2) && b4 & 0xF0 == 0xB0 && is_continuation(*b5)
    )
}

/// Combines a six-byte surrogate pair into its supplementary code point.
///
/// The caller checks the shape with [`is_supplementary_character`] first.
#[inline]
#[must_use]
pub fn get_supplementary_character(seq: &[u8; 6]) -> u32 {
    0x10000
        + (u32::from(seq[1] & 0x0F) << 16)
        + (u32::from(seq[2] & 0x3F) << 10)
        + (u32::from(seq[4] & 0x0F) << 6)
        + u32::from(seq[5] & 0x3F)
}

/// Decodes one character, joining a six-byte surrogate pair into a single
/// code point. Returns the value and the rest of the input.
#[must_use]
pub fn next_character(bytes: &[u8]) -> Option<(u32, &[u8])> {
    if let Some(seq) = bytes.first_chunk::<6>() {
        if is_supplementary_character(seq) {
            return Some((get_supplementary_character(seq), &bytes[6..]));
        }
    }
    let decoded = next(bytes)?;
    Some((u32::from(decoded.value()), &bytes[decoded.byte_len()..]))
}

/// Iterator over the characters of a byte slice, as produced by [`next`].
#[derive(Debug, Clone)]
pub struct Chars<'a> {
    bytes: &'a [u8],
}

impl<'a> Chars<'a> {
    /// Iterates over the characters of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// The bytes not yet decoded.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl Iterator for Chars<'_> {
    type Item = Decoded;

    #[inline]
    fn next(&mut self) -> Option<Decoded> {
        let decoded = next(self.bytes)?;
        self.bytes = &self.bytes[decoded.byte_len()..];
        Some(decoded)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.bytes.len().div_ceil(3), Some(self.bytes.len()))
    }
}

impl core::iter::FusedIterator for Chars<'_> {}
