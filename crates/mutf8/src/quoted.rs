//! Quoted-ASCII: a printable rendering of strings for diagnostics.
//!
//! Every character in `' '..='~'` is written as itself and every other
//! character as a six-byte `\uXXXX` escape with four lowercase hex digits.
//! Measuring and writing are separate passes; the writer truncates at a token
//! boundary when the output is too small and always NUL-terminates.

#[cfg(feature = "unquote")]
use alloc::{borrow::Cow, vec};

#[cfg(feature = "unquote")]
use bstr::ByteSlice;

use crate::{
    decode::{Chars, Decoded},
    unit::CodeUnit,
};
#[cfg(feature = "unquote")]
use crate::{encode::write_unit, error::QuotedAsciiError};

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";
const ESCAPE_LEN: usize = 6;

#[inline]
fn token_len(c: u16) -> usize {
    if c.is_printable_ascii() { 1 } else { ESCAPE_LEN }
}

fn quoted_len(units: impl Iterator<Item = u16>) -> usize {
    units.map(token_len).sum()
}

#[allow(clippy::cast_possible_truncation)]
fn quote_into(units: impl Iterator<Item = u16>, buf: &mut [u8]) -> usize {
    assert!(!buf.is_empty(), "zero length output buffer");
    let mut pos = 0;
    for c in units {
        let len = token_len(c);
        // Keep one byte for the terminator.
        if pos + len >= buf.len() {
            #[cfg(feature = "tracing")]
            tracing::debug!(written = pos, capacity = buf.len(), "quoted ascii truncated");
            break;
        }
        if len == 1 {
            buf[pos] = c as u8;
        } else {
            buf[pos..pos + ESCAPE_LEN].copy_from_slice(&[
                b'\\',
                b'u',
                HEX_DIGITS[usize::from(c >> 12)],
                HEX_DIGITS[usize::from((c >> 8) & 0xF)],
                HEX_DIGITS[usize::from((c >> 4) & 0xF)],
                HEX_DIGITS[usize::from(c & 0xF)],
            ]);
        }
        pos += len;
    }
    buf[pos] = 0;
    pos
}

/// Length of the quoted-ASCII rendering of the encoded string `bytes`,
/// excluding the terminator.
#[must_use]
pub fn quoted_ascii_length(bytes: &[u8]) -> usize {
    quoted_len(Chars::new(bytes).map(Decoded::value))
}

/// Writes the quoted-ASCII rendering of `bytes` into `buf` followed by a NUL.
///
/// Size `buf` as `quoted_ascii_length(bytes) + 1` to get the whole string;
/// a smaller buffer receives a prefix that ends on a token boundary. Returns
/// the number of bytes written, excluding the terminator.
///
/// ```rust
/// let bytes = b"tab\there";
/// let mut buf = vec![0u8; mutf8::quoted_ascii_length(bytes) + 1];
/// let n = mutf8::as_quoted_ascii(bytes, &mut buf);
/// assert_eq!(&buf[..n], br"tab\u0009here");
/// ```
///
/// # Panics
///
/// If `buf` is empty.
pub fn as_quoted_ascii(bytes: &[u8], buf: &mut [u8]) -> usize {
    quote_into(Chars::new(bytes).map(Decoded::value), buf)
}

/// Length of the quoted-ASCII rendering of a narrow or wide string.
#[must_use]
pub fn units_quoted_ascii_length<T: CodeUnit>(units: &[T]) -> usize {
    quoted_len(units.iter().map(|c| c.to_u16()))
}

/// Writes the quoted-ASCII rendering of a narrow or wide string, with the
/// same truncation rules as [`as_quoted_ascii`]. Narrow units are Latin-1
/// values, so `0xE9` becomes `\u00e9`.
///
/// # Panics
///
/// If `buf` is empty.
pub fn units_as_quoted_ascii<T: CodeUnit>(units: &[T], buf: &mut [u8]) -> usize {
    quote_into(units.iter().map(|c| c.to_u16()), buf)
}

#[cfg(feature = "unquote")]
#[allow(clippy::cast_possible_truncation)]
fn hex_value(digit: u8) -> Option<u16> {
    char::from(digit).to_digit(16).map(|v| v as u16)
}

/// Decodes `quoted` into `out`, or only measures it when `out` is `None`.
#[cfg(feature = "unquote")]
fn unquote(quoted: &[u8], mut out: Option<&mut [u8]>) -> Result<usize, QuotedAsciiError> {
    let mut length = 0;
    let mut i = 0;
    while i < quoted.len() {
        let c = quoted[i];
        if c != b'\\' {
            if let Some(out) = out.as_deref_mut() {
                out[length] = c;
            }
            length += 1;
            i += 1;
            continue;
        }

        let &escape = quoted
            .get(i + 1)
            .ok_or(QuotedAsciiError::TruncatedEscape { offset: i })?;
        let literal = match escape {
            b'u' => {
                let digits = quoted
                    .get(i + 2..i + ESCAPE_LEN)
                    .ok_or(QuotedAsciiError::TruncatedEscape { offset: i })?;
                let mut value = 0u16;
                for (k, &digit) in digits.iter().enumerate() {
                    let nibble = hex_value(digit).ok_or(QuotedAsciiError::BadHexDigit {
                        digit,
                        offset: i + 2 + k,
                    })?;
                    value = (value << 4) | nibble;
                }
                length += match out.as_deref_mut() {
                    Some(out) => write_unit(&mut out[length..], value),
                    None => value.utf8_size(),
                };
                i += ESCAPE_LEN;
                continue;
            }
            b't' => b'\t',
            b'n' => b'\n',
            b'r' => b'\r',
            b'f' => 0x0C,
            other => {
                return Err(QuotedAsciiError::UnknownEscape {
                    escape: char::from(other),
                    offset: i,
                });
            }
        };
        if let Some(out) = out.as_deref_mut() {
            out[length] = literal;
        }
        length += 1;
        i += 2;
    }
    Ok(length)
}

/// Converts a quoted-ASCII string back to Modified UTF-8.
///
/// Input ends at the first NUL or at the end of the slice. Recognizes `\uXXXX`
/// (either hex case), `\t`, `\n`, `\r` and `\f`. A string without escapes is
/// returned as is; otherwise the output is measured first and then written
/// into one exactly sized allocation.
///
/// # Errors
///
/// Any other escape, a bad hex digit or an escape cut off by the end of the
/// input.
#[cfg(feature = "unquote")]
pub fn try_from_quoted_ascii(quoted: &[u8]) -> Result<Cow<'_, [u8]>, QuotedAsciiError> {
    let quoted = &quoted[..quoted.find_byte(0).unwrap_or(quoted.len())];
    if quoted.find_byte(b'\\').is_none() {
        return Ok(Cow::Borrowed(quoted));
    }
    let length = unquote(quoted, None)?;
    let mut buffer = vec![0u8; length];
    let written = unquote(quoted, Some(&mut buffer))?;
    debug_assert_eq!(written, length);
    Ok(Cow::Owned(buffer))
}

/// Like [`try_from_quoted_ascii`], for strings known to come from
/// [`as_quoted_ascii`].
///
/// ```rust
/// let bytes = mutf8::from_quoted_ascii(br"caf\u00e9\n");
/// assert_eq!(&*bytes, b"caf\xC3\xA9\n");
/// ```
///
/// # Panics
///
/// On any input [`try_from_quoted_ascii`] rejects. Such a string cannot have
/// been produced by this crate.
#[cfg(feature = "unquote")]
#[must_use]
#[track_caller]
pub fn from_quoted_ascii(quoted: &[u8]) -> Cow<'_, [u8]> {
    try_from_quoted_ascii(quoted).unwrap_or_else(|err| panic!("malformed quoted ascii: {err}"))
}
