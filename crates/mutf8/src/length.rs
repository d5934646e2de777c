//! Character counting and narrow/wide classification in a single pass.

/// What a length scan learned about an encoded string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StringInfo {
    /// Number of decoded characters (UTF-16 code units), not bytes.
    pub length: usize,
    /// Every character fits in a narrow (Latin-1) unit.
    pub is_latin1: bool,
    /// At least one multi-byte sequence was seen.
    pub has_multibyte: bool,
}

/// Bytes of the form `10xxxxxx` continue a sequence; every other byte starts
/// one. The Latin-1 test is byte-level: a continuation byte following a byte
/// above `0xC3` means the character decodes to more than `0xFF`.
#[inline]
fn scan(bytes: impl Iterator<Item = u8>) -> StringInfo {
    let mut info = StringInfo {
        length: 0,
        is_latin1: true,
        has_multibyte: false,
    };
    let mut prev = 0u8;
    for c in bytes {
        if c & 0xC0 == 0x80 {
            info.has_multibyte = true;
            if prev > 0xC3 {
                info.is_latin1 = false;
            }
        } else {
            info.length += 1;
        }
        prev = c;
    }
    info
}

/// Counts the characters in `bytes`, which is assumed to be legally encoded.
///
/// ```rust
/// let info = mutf8::unicode_length(&[0x41, 0xC3, 0xBF]);
/// assert_eq!(info.length, 2);
/// assert!(info.is_latin1 && info.has_multibyte);
/// ```
#[must_use]
pub fn unicode_length(bytes: &[u8]) -> StringInfo {
    scan(bytes.iter().copied())
}

/// Like [`unicode_length`] but stops at the first NUL byte, or at the end of
/// the slice if there is none.
#[must_use]
pub fn unicode_length_nul_terminated(bytes: &[u8]) -> StringInfo {
    scan(bytes.iter().copied().take_while(|&b| b != 0))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn ascii_only() {
        let info = unicode_length(b"hello, world");
        assert_eq!(
            info,
            StringInfo {
                length: 12,
                is_latin1: true,
                has_multibyte: false
            }
        );
    }

    #[test]
    fn empty() {
        let info = unicode_length(&[]);
        assert_eq!(info.length, 0);
        assert!(info.is_latin1);
        assert!(!info.has_multibyte);
    }

    #[rstest]
    #[case(&[0xC3, 0xBF], 1, true)]
    #[case(&[0xC4, 0x80], 1, false)]
    #[case(&[0xC0, 0x80], 1, true)]
    #[case(&[0xE2, 0x82, 0xAC], 1, false)]
    #[case(&[0xE0, 0x80, 0x80], 1, false)]
    #[case(&[0x41, 0xC3, 0xBF], 2, true)]
    fn multibyte(#[case] bytes: &[u8], #[case] length: usize, #[case] is_latin1: bool) {
        let info = unicode_length(bytes);
        assert_eq!(info.length, length);
        assert_eq!(info.is_latin1, is_latin1);
        assert!(info.has_multibyte);
    }

    // Classification of malformed input is purely byte-level.
    #[test]
    fn malformed_classification() {
        // A stray continuation byte after ASCII is counted as part of the
        // previous character and does not affect Latin-1-ness.
        let info = unicode_length(&[0x41, 0x80]);
        assert_eq!(info.length, 1);
        assert!(info.is_latin1);
        assert!(info.has_multibyte);

        // An invalid lead above 0xC3 clears Latin-1 even though the decoder
        // would emit it as a raw byte.
        let info = unicode_length(&[0xF8, 0x80]);
        assert_eq!(info.length, 1);
        assert!(!info.is_latin1);

        // A continuation byte never exceeds 0xBF, so a second one in a row
        // does not clear Latin-1 on its own.
        let info = unicode_length(&[0xC2, 0xBF, 0xBF]);
        assert_eq!(info.length, 1);
        assert!(info.is_latin1);
    }

    #[test]
    fn nul_terminated_stops_at_nul() {
        let info = unicode_length_nul_terminated(&[0x41, 0xC4, 0x80, 0x00, 0x42, 0x43]);
        assert_eq!(info.length, 2);
        assert!(!info.is_latin1);
        assert!(info.has_multibyte);

        let info = unicode_length_nul_terminated(&[0x00, 0xC4, 0x80]);
        assert_eq!(
            info,
            StringInfo {
                length: 0,
                is_latin1: true,
                has_multibyte: false,
            }
        );
    }

    #[test]
    fn nul_terminated_without_nul_uses_whole_slice() {
        let bytes = [0x41, 0xC3, 0xBF];
        assert_eq!(
            unicode_length_nul_terminated(&bytes),
            unicode_length(&bytes)
        );
    }
}
