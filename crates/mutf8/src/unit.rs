//! The two in-memory character widths the codec reads and writes.

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A fixed-width character unit: `u8` for narrow (Latin-1) strings and `u16`
/// for wide (UTF-16) strings.
///
/// All bulk operations are generic over this trait and are monomorphized for
/// each width; there is no dynamic dispatch on the hot path.
pub trait CodeUnit: Copy + sealed::Sealed {
    /// Truncates a decoded 16-bit value to this width.
    ///
    /// Narrow strings are only produced from input whose characters all fit in
    /// eight bits, so the truncation is lossless for the intended callers.
    fn from_decoded(value: u16) -> Self;

    /// The unit's value as a UTF-16 code unit.
    fn to_u16(self) -> u16;

    /// Number of Modified UTF-8 bytes needed to encode this unit.
    fn utf8_size(self) -> usize;

    /// Whether the unit is printable ASCII (`' '..='~'`).
    #[inline]
    fn is_printable_ascii(self) -> bool {
        (32..127).contains(&self.to_u16())
    }
}

impl CodeUnit for u8 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn from_decoded(value: u16) -> Self {
        value as u8
    }

    #[inline]
    fn to_u16(self) -> u16 {
        u16::from(self)
    }

    /// One byte for `0x01..=0x7F`; zero and everything above ASCII take two.
    #[inline]
    fn utf8_size(self) -> usize {
        if (0x01..=0x7F).contains(&self) { 1 } else { 2 }
    }
}

impl CodeUnit for u16 {
    #[inline]
    fn from_decoded(value: u16) -> Self {
        value
    }

    #[inline]
    fn to_u16(self) -> u16 {
        self
    }

    #[inline]
    fn utf8_size(self) -> usize {
        match self {
            0x0001..=0x007F => 1,
            0x0000 | 0x0080..=0x07FF => 2,
            _ => 3,
        }
    }
}
