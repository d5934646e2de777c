use alloc::vec::Vec;

use quickcheck::{QuickCheck, TestResult};

use super::test_count;
use crate::{
    Chars, LegalityRules, as_utf8, check_legal_utf8, is_legal_utf8, truncate_to_legal_utf8,
    unicode_length,
};

/// Property: the strict rules only ever reject more than the legacy rules, and
/// the boolean and diagnostic forms agree.
#[test]
fn strict_implies_legacy_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let strict = is_legal_utf8(&bytes, LegalityRules::Strict);
        let legacy = is_legal_utf8(&bytes, LegalityRules::Legacy);
        (!strict || legacy)
            && strict == check_legal_utf8(&bytes, LegalityRules::Strict).is_ok()
            && legacy == check_legal_utf8(&bytes, LegalityRules::Legacy).is_ok()
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Property: a legal buffer decodes without a single invalid character, and
/// the character count matches the length scan.
#[test]
fn legal_buffers_decode_cleanly_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> TestResult {
        if !is_legal_utf8(&bytes, LegalityRules::Legacy) {
            return TestResult::discard();
        }
        let mut count = 0;
        for decoded in Chars::new(&bytes) {
            if !decoded.is_valid() {
                return TestResult::failed();
            }
            count += 1;
        }
        TestResult::from_bool(count == unicode_length(&bytes).length)
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> TestResult);
}

/// Property: cutting a legal string anywhere and repairing it yields a legal
/// prefix of the original.
#[test]
fn truncation_repair_quickcheck() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(units: Vec<u16>, cut: usize) -> TestResult {
        let encoded = as_utf8(&units);
        if encoded.len() < 5 {
            return TestResult::discard();
        }
        let cut = 5 + cut % (encoded.len() - 4);
        let mut buf = encoded.as_bytes()[..cut].to_vec();
        buf.push(0);
        let at = truncate_to_legal_utf8(&mut buf);
        TestResult::from_bool(
            at <= cut
                && buf[at] == 0
                && buf[..at] == encoded.as_bytes()[..at]
                && is_legal_utf8(&buf[..at], LegalityRules::Strict),
        )
    }

    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>, usize) -> TestResult);
}
