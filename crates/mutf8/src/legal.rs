//! Validation of untrusted bytes and repair of truncated buffers.

use crate::{
    decode::{is_continuation, is_supplementary_character},
    error::{IllegalKind, IllegalSequence},
    options::LegalityRules,
};

/// Length of the leading run of bytes in `1..=0x7F`, in steps of four.
///
/// `b | b.wrapping_sub(1)` has its high bit set exactly when `b == 0` or
/// `b >= 0x80`, so one test covers a whole chunk.
#[inline]
fn ascii_prefix_len(buffer: &[u8]) -> usize {
    let mut i = 0;
    for chunk in buffer.chunks_exact(4) {
        let res = chunk
            .iter()
            .fold(0u8, |acc, &b| acc | b | b.wrapping_sub(1));
        if res >= 0x80 {
            break;
        }
        i += 4;
    }
    i
}

/// Reports the first illegal sequence in `buffer`, if any.
///
/// `buffer` holds the encoded bytes only; a terminator, if the caller keeps
/// one, must not be included. An embedded NUL byte is always illegal.
///
/// # Errors
///
/// Returns the offset and kind of the first illegal sequence.
pub fn check_legal_utf8(buffer: &[u8], rules: LegalityRules) -> Result<(), IllegalSequence> {
    let lenient = rules.accepts_non_minimal();
    let length = buffer.len();
    let mut i = ascii_prefix_len(buffer);

    while i < length {
        let b = buffer[i];
        if b == 0 {
            return Err(illegal(i, IllegalKind::EmbeddedNul));
        }
        if b < 0x80 {
            i += 1;
            continue;
        }
        if is_supplementary_character(&buffer[i..]) {
            i += 6;
            continue;
        }
        match b >> 4 {
            // 110xxxxx 10xxxxxx
            0xC | 0xD => {
                let Some(&b1) = buffer.get(i + 1).filter(|b1| is_continuation(**b1)) else {
                    return Err(illegal(i, IllegalKind::MissingContinuation));
                };
                let c = (u16::from(b & 0x1F) << 6) | u16::from(b1 & 0x3F);
                if !(lenient || c == 0 || c >= 0x80) {
                    return Err(illegal(i, IllegalKind::NonMinimal(c)));
                }
                i += 2;
            }
            // 1110xxxx 10xxxxxx 10xxxxxx
            0xE => {
                let (Some(&b1), Some(&b2)) = (buffer.get(i + 1), buffer.get(i + 2)) else {
                    return Err(illegal(i, IllegalKind::MissingContinuation));
                };
                if !is_continuation(b1) || !is_continuation(b2) {
                    return Err(illegal(i, IllegalKind::MissingContinuation));
                }
                let c = (u16::from(b & 0x0F) << 12)
                    | (u16::from(b1 & 0x3F) << 6)
                    | u16::from(b2 & 0x3F);
                if !(lenient || c >= 0x800) {
                    return Err(illegal(i, IllegalKind::NonMinimal(c)));
                }
                i += 3;
            }
            // 0x8..=0xB continuation bytes, 0xF four-byte leads
            _ => return Err(illegal(i, IllegalKind::BadLeadByte(b))),
        }
    }
    Ok(())
}

#[cold]
fn illegal(offset: usize, kind: IllegalKind) -> IllegalSequence {
    #[cfg(feature = "tracing")]
    tracing::debug!(offset, %kind, "illegal modified utf-8");
    IllegalSequence { offset, kind }
}

/// Whether `buffer` is legal Modified UTF-8 under `rules`.
///
/// ```rust
/// use mutf8::{LegalityRules, is_legal_utf8};
///
/// // 'A' written in two bytes.
/// let overlong = [0xC1, 0x81];
/// assert!(is_legal_utf8(&overlong, LegalityRules::Legacy));
/// assert!(!is_legal_utf8(&overlong, LegalityRules::Strict));
/// ```
#[must_use]
pub fn is_legal_utf8(buffer: &[u8], rules: LegalityRules) -> bool {
    check_legal_utf8(buffer, rules).is_ok()
}

/// Whether `b` can start a two, three or six byte sequence.
#[inline]
fn is_starting_byte(b: u8) -> bool {
    (0xC0..=0xEF).contains(&b)
}

/// Drops a possibly incomplete last character from a NUL-terminated buffer.
///
/// Scans backwards from the byte before the terminator for the last byte that
/// could start a multi-byte sequence and writes a NUL there. This may drop a
/// complete final character too; the buffer was already truncated, so losing
/// one more character is acceptable. If the byte before the terminator is
/// ASCII nothing changes. `0xED` may be the fourth byte of a six-byte pair, in
/// which case the whole pair is dropped.
///
/// `buffer` is expected to be longer than five bytes and end with NUL; both
/// are checked in debug builds only. Returns the index of the terminator.
pub fn truncate_to_legal_utf8(buffer: &mut [u8]) -> usize {
    let length = buffer.len();
    debug_assert!(length > 5, "invalid length");
    debug_assert!(buffer.last() == Some(&0), "buffer should be NUL-terminated");
    if length < 2 || buffer[length - 2] < 0x80 {
        return length.saturating_sub(1);
    }

    for mut index in (1..=length - 2).rev() {
        if !is_starting_byte(buffer[index]) {
            continue;
        }
        // A high surrogate `ED Ax xx` right before this `ED` means it is the
        // fourth byte of a pair.
        if buffer[index] == 0xED
            && index >= 3
            && buffer[index - 3] == 0xED
            && buffer[index - 2] & 0xF0 == 0xA0
        {
            debug_assert!(is_continuation(buffer[index - 1]), "sanity check");
            index -= 3;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(from = length - 1, to = index, "truncated to legal utf-8");
        buffer[index] = 0;
        return index;
    }
    length - 1
}
