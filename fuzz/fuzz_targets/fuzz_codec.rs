#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mutf8::{
    Chars, LegalityRules, as_quoted_ascii, as_utf8, check_legal_utf8, convert_to_unicode,
    from_quoted_ascii, is_legal_utf8, quoted_ascii_length, truncate_to_legal_utf8,
    unicode_length,
};

#[derive(Debug, Arbitrary)]
struct Input {
    /// bit 0: legacy rules; bit 1: decode narrow instead of wide
    flags: u8,
    /// Where to cut the re-encoded string before repairing it.
    cut: u16,
    /// Capacity of the bounded quoted-ASCII buffer.
    quoted_cap: u8,
    bytes: Vec<u8>,
}

fn codec(input: Input) {
    let Input {
        flags,
        cut,
        quoted_cap,
        bytes,
    } = input;
    let rules = LegalityRules::from(flags & 1 != 0);

    // The two validation entry points must agree.
    let legal = is_legal_utf8(&bytes, rules);
    assert_eq!(legal, check_legal_utf8(&bytes, rules).is_ok());
    if legal {
        assert!(Chars::new(&bytes).all(|d| d.is_valid()));
    }

    // Decoding arbitrary bytes must make progress and never overrun.
    let info = unicode_length(&bytes);
    let units: Vec<u16> = if flags & 2 != 0 {
        let mut narrow = vec![0u8; info.length];
        convert_to_unicode(&bytes, &mut narrow);
        narrow.into_iter().map(u16::from).collect()
    } else {
        let mut wide = vec![0u16; info.length];
        convert_to_unicode(&bytes, &mut wide);
        wide
    };

    // Whatever came out re-encodes to a strictly legal string.
    let encoded = as_utf8(&units);
    assert!(is_legal_utf8(encoded.as_bytes(), LegalityRules::Strict));

    // Repairing any cut of it stays legal.
    if encoded.len() >= 5 {
        let cut = 5 + usize::from(cut) % (encoded.len() - 4);
        let mut buf = encoded.as_bytes()[..cut].to_vec();
        buf.push(0);
        let at = truncate_to_legal_utf8(&mut buf);
        assert!(is_legal_utf8(&buf[..at], LegalityRules::Strict));
    }

    // Quoting is predicted exactly, and a bounded buffer gets a prefix.
    let len = quoted_ascii_length(&bytes);
    let mut quoted = vec![0u8; len + 1];
    assert_eq!(as_quoted_ascii(&bytes, &mut quoted), len);
    let mut bounded = vec![0u8; usize::from(quoted_cap) + 1];
    let n = as_quoted_ascii(&bytes, &mut bounded);
    assert_eq!(bounded[..n], quoted[..n]);

    // Without backslashes in the source, unquoting restores the re-encoding.
    if !units.contains(&u16::from(b'\\')) {
        let mut quoted = vec![0u8; quoted_ascii_length(encoded.as_bytes()) + 1];
        as_quoted_ascii(encoded.as_bytes(), &mut quoted);
        assert_eq!(*from_quoted_ascii(&quoted), *encoded.as_bytes());
    }
}

fuzz_target!(|input: Input| codec(input));
