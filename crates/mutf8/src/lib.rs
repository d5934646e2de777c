//! A codec for Modified UTF-8, the byte encoding used for strings in class
//! files and inside the runtime.
//!
//! Modified UTF-8 differs from standard UTF-8 in two ways: the null character
//! is written as the two bytes `C0 80` so that encoded strings never contain a
//! zero byte, and supplementary characters are written as a UTF-16 surrogate
//! pair, each half encoded in three bytes (six bytes in total).
//!
//! The crate converts between that byte form and two in-memory
//! representations:
//!
//! - narrow strings of Latin-1 units (`u8`), and
//! - wide strings of UTF-16 code units (`u16`).
//!
//! It also validates untrusted bytes ([`is_legal_utf8`]), repairs buffers that
//! were cut in the middle of a character ([`truncate_to_legal_utf8`]) and
//! renders strings as printable ASCII with `\uXXXX` escapes
//! ([`as_quoted_ascii`]).
//!
//! ```rust
//! use mutf8::{convert_to_unicode, unicode_length};
//!
//! let bytes = [0x41, 0xC3, 0xBF];
//! let info = unicode_length(&bytes);
//! assert_eq!(info.length, 2);
//! assert!(info.is_latin1);
//!
//! let mut wide = vec![0u16; info.length];
//! convert_to_unicode(&bytes, &mut wide);
//! assert_eq!(wide, [0x0041, 0x00FF]);
//! ```
//!
//! Malformed input never makes the decoder stall or read past the end of a
//! slice: a byte that does not start a well-formed sequence is decoded as
//! itself and consumes exactly one byte (see [`Decoded::Invalid`]).

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod convert;
mod decode;
mod encode;
mod error;
mod legal;
mod length;
mod options;
mod quoted;
mod unit;

#[cfg(test)]
mod tests;

pub use convert::convert_to_unicode;
pub use decode::{
    Chars, Decoded, get_supplementary_character, is_supplementary_character, next,
    next_character, next_unit,
};
pub use encode::{
    EncodedBuf, as_utf8, as_utf8_into, convert_to_utf8, is_latin1, is_latin1_units,
    utf8_length, utf8_length_as_int, write_unit,
};
pub use error::{IllegalKind, IllegalSequence, QuotedAsciiError};
pub use legal::{check_legal_utf8, is_legal_utf8, truncate_to_legal_utf8};
pub use length::{StringInfo, unicode_length, unicode_length_nul_terminated};
pub use options::{LEGACY_MAJOR_VERSION_CUTOFF, LegalityRules};
#[cfg(feature = "unquote")]
pub use quoted::{from_quoted_ascii, try_from_quoted_ascii};
pub use quoted::{
    as_quoted_ascii, quoted_ascii_length, units_as_quoted_ascii, units_quoted_ascii_length,
};
pub use unit::CodeUnit;
