use thiserror::Error;

/// Why a byte buffer failed validation.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IllegalKind {
    /// A zero byte, which Modified UTF-8 always writes as `C0 80`.
    #[error("embedded NUL byte")]
    EmbeddedNul,
    /// A byte that cannot begin a sequence.
    #[error("byte {0:#04X} cannot start a sequence")]
    BadLeadByte(u8),
    /// A lead byte not followed by enough continuation bytes.
    #[error("missing continuation byte")]
    MissingContinuation,
    /// An overlong sequence, rejected under the strict rules.
    #[error("non-minimal encoding of U+{0:04X}")]
    NonMinimal(u16),
}

/// The first illegal sequence found in a buffer and where it starts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct IllegalSequence {
    /// Byte offset of the start of the sequence.
    pub offset: usize,
    /// What is wrong with it.
    pub kind: IllegalKind,
}

/// A quoted-ASCII string that could not have been produced by
/// [`as_quoted_ascii`](crate::as_quoted_ascii).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum QuotedAsciiError {
    /// A backslash followed by something other than `u`, `t`, `n`, `r` or `f`.
    #[error("unknown escape '\\{escape}' at byte {offset}")]
    UnknownEscape {
        /// The character after the backslash.
        escape: char,
        /// Offset of the backslash.
        offset: usize,
    },
    /// A `\u` escape whose four digits are not all hexadecimal.
    #[error("invalid hex digit {digit:#04X} in \\u escape at byte {offset}")]
    BadHexDigit {
        /// The offending byte.
        digit: u8,
        /// Offset of the digit.
        offset: usize,
    },
    /// The input ends inside an escape.
    #[error("escape truncated at byte {offset}")]
    TruncatedEscape {
        /// Offset of the backslash.
        offset: usize,
    },
}
