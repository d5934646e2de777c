/// Highest class-file major version validated with the legacy rules.
pub const LEGACY_MAJOR_VERSION_CUTOFF: u16 = 47;

/// Which legality rules [`is_legal_utf8`](crate::is_legal_utf8) applies.
///
/// Older class files were checked leniently and may contain non-minimal
/// ("overlong") two- and three-byte sequences; newer ones must use the
/// shortest encoding of every character.
///
/// ```rust
/// use mutf8::LegalityRules;
///
/// assert_eq!(LegalityRules::for_major_version(45), LegalityRules::Legacy);
/// assert_eq!(LegalityRules::for_major_version(52), LegalityRules::Strict);
/// ```
///
/// # Default
///
/// [`LegalityRules::Strict`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegalityRules {
    /// Class-file major version at or below
    /// [`LEGACY_MAJOR_VERSION_CUTOFF`]: non-minimal encodings are accepted.
    Legacy,
    /// Every two- and three-byte sequence must be minimal. The two-byte null
    /// `C0 80` is still accepted since it is the only encoding of U+0000.
    #[default]
    Strict,
}

impl LegalityRules {
    /// Rules for a class file with the given major version.
    #[must_use]
    pub const fn for_major_version(major: u16) -> Self {
        if major <= LEGACY_MAJOR_VERSION_CUTOFF {
            LegalityRules::Legacy
        } else {
            LegalityRules::Strict
        }
    }

    /// Whether overlong two- and three-byte sequences pass validation.
    #[must_use]
    pub const fn accepts_non_minimal(self) -> bool {
        matches!(self, LegalityRules::Legacy)
    }
}

/// Maps the "version is at or below the cutoff" flag.
impl From<bool> for LegalityRules {
    fn from(legacy: bool) -> Self {
        if legacy {
            LegalityRules::Legacy
        } else {
            LegalityRules::Strict
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_is_inclusive() {
        assert_eq!(
            LegalityRules::for_major_version(LEGACY_MAJOR_VERSION_CUTOFF),
            LegalityRules::Legacy
        );
        assert_eq!(
            LegalityRules::for_major_version(LEGACY_MAJOR_VERSION_CUTOFF + 1),
            LegalityRules::Strict
        );
    }

    #[test]
    fn from_flag() {
        assert!(LegalityRules::from(true).accepts_non_minimal());
        assert!(!LegalityRules::from(false).accepts_non_minimal());
        assert_eq!(LegalityRules::default(), LegalityRules::Strict);
    }
}
