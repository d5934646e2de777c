use crate::{decode::next_unit, unit::CodeUnit};

/// Decodes `out.len()` characters from `bytes` into `out`.
///
/// `out` should be sized with [`unicode_length`](crate::unicode_length). A
/// leading run of ASCII is copied directly; the rest goes through the
/// one-character decoder. If the input runs out early the remaining slots are
/// left untouched.
///
/// Returns the number of input bytes consumed.
pub fn convert_to_unicode<T: CodeUnit>(bytes: &[u8], out: &mut [T]) -> usize {
    let mut index = 0;
    for (slot, &b) in out.iter_mut().zip(bytes) {
        if b > 0x7F {
            break;
        }
        *slot = T::from_decoded(u16::from(b));
        index += 1;
    }

    let mut rest = &bytes[index..];
    for slot in &mut out[index..] {
        if rest.is_empty() {
            break;
        }
        rest = next_unit(rest, slot);
    }
    bytes.len() - rest.len()
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::unicode_length;

    #[test]
    fn mixed_wide() {
        let bytes = [0x41, 0xC3, 0xBF];
        let mut out = vec![0u16; unicode_length(&bytes).length];
        assert_eq!(convert_to_unicode(&bytes, &mut out), 3);
        assert_eq!(out, [0x0041, 0x00FF]);
    }

    #[test]
    fn mixed_narrow() {
        let bytes = b"caf\xC3\xA9 \xC0\x80!";
        let mut out = vec![0u8; unicode_length(bytes).length];
        convert_to_unicode(bytes, &mut out);
        assert_eq!(out, b"caf\xE9 \x00!");
    }

    #[test]
    fn ascii_fast_path_then_decoder() {
        let bytes = [b'a', b'b', 0xE2, 0x82, 0xAC, b'c'];
        let mut out = [0u16; 4];
        assert_eq!(convert_to_unicode(&bytes, &mut out), bytes.len());
        assert_eq!(out, [0x61, 0x62, 0x20AC, 0x63]);
    }

    #[test]
    fn stops_after_requested_count() {
        let bytes = b"abcdef";
        let mut out = [0u16; 3];
        assert_eq!(convert_to_unicode(bytes, &mut out), 3);
        assert_eq!(out, [0x61, 0x62, 0x63]);
    }

    #[test]
    fn malformed_bytes_pass_through() {
        let bytes = [0x80, 0x41];
        let mut out = [0u16; 2];
        convert_to_unicode(&bytes, &mut out);
        assert_eq!(out, [0x80, 0x41]);
    }
}
