use crate::grammar::Grammar;

/// A major, minor or patch number.
///
/// Kept as the validated digit string rather than a machine integer: SemVer puts
/// no upper bound on these numbers, and `u64` would overflow on a 40-digit major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumericIdentifier(String);

impl NumericIdentifier {
    /// Returns `None` unless `value` is ASCII digits with no leading zero.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        Self::new_in(Grammar::get(), value.into()).ok()
    }

    /// Hands `value` back on failure so the caller can report it.
    pub(crate) fn new_in(grammar: &Grammar, value: String) -> Result<Self, String> {
        if grammar.is_numeric(&value) {
            Ok(Self(value))
        } else {
            Err(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The dot-separated identifiers after the `-`. Empty means "not a pre-release".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Prerelease(String);

impl Prerelease {
    pub const EMPTY: Prerelease = Prerelease(String::new());

    /// Returns `None` if `value` is non-empty and breaks the pre-release grammar.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        Self::new_in(Grammar::get(), value.into()).ok()
    }

    pub(crate) fn new_in(grammar: &Grammar, value: String) -> Result<Self, String> {
        if value.is_empty() || grammar.is_prerelease(&value) {
            Ok(Self(value))
        } else {
            Err(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// The dot-separated identifiers after the `+`. Never affects precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BuildMetadata(String);

impl BuildMetadata {
    pub const EMPTY: BuildMetadata = BuildMetadata(String::new());

    /// Returns `None` if `value` is non-empty and breaks the build metadata grammar.
    pub fn new(value: impl Into<String>) -> Option<Self> {
        Self::new_in(Grammar::get(), value.into()).ok()
    }

    pub(crate) fn new_in(grammar: &Grammar, value: String) -> Result<Self, String> {
        if value.is_empty() || grammar.is_build_metadata(&value) {
            Ok(Self(value))
        } else {
            Err(value)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

macro_rules! impl_display {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl AsRef<str> for $ty {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }
        )*
    };
}

impl_display!(NumericIdentifier, Prerelease, BuildMetadata);
