mod grammar;
mod identifier;

pub use grammar::Grammar;
pub use identifier::{BuildMetadata, NumericIdentifier, Prerelease};

#[cfg(feature = "serde")]
use serde_with::{DeserializeFromStr, SerializeDisplay};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    #[error("version is too short, expected MAJOR.MINOR.PATCH: {version}")]
    TooShort { version: String },
    #[error("invalid major version: {value}")]
    InvalidMajor { value: String },
    #[error("invalid minor version: {value}")]
    InvalidMinor { value: String },
    #[error("invalid patch version: {value}")]
    InvalidPatch { value: String },
    #[error("invalid pre-release: {value}")]
    InvalidPreRelease { value: String },
    #[error("invalid build metadata: {value}")]
    InvalidBuildMetadata { value: String },
}

/// The component of a version that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Major,
    Minor,
    Patch,
    PreRelease,
    BuildMetadata,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Field::Major => "major",
            Field::Minor => "minor",
            Field::Patch => "patch",
            Field::PreRelease => "pre-release",
            Field::BuildMetadata => "build metadata",
        })
    }
}

impl VersionError {
    /// Which field broke the grammar. `None` for [`VersionError::TooShort`],
    /// where the string never got as far as being split into fields.
    pub fn field(&self) -> Option<Field> {
        match self {
            VersionError::TooShort { .. } => None,
            VersionError::InvalidMajor { .. } => Some(Field::Major),
            VersionError::InvalidMinor { .. } => Some(Field::Minor),
            VersionError::InvalidPatch { .. } => Some(Field::Patch),
            VersionError::InvalidPreRelease { .. } => Some(Field::PreRelease),
            VersionError::InvalidBuildMetadata { .. } => Some(Field::BuildMetadata),
        }
    }

    /// The raw text that was rejected.
    pub fn value(&self) -> &str {
        match self {
            VersionError::TooShort { version } => version,
            VersionError::InvalidMajor { value }
            | VersionError::InvalidMinor { value }
            | VersionError::InvalidPatch { value }
            | VersionError::InvalidPreRelease { value }
            | VersionError::InvalidBuildMetadata { value } => value,
        }
    }
}

/// A SemVer 2.0.0 version: `MAJOR.MINOR.PATCH[-PRERELEASE][+BUILD]`.
///
/// Every field is validated on construction, so a `Version` that exists is
/// well-formed. Equality is field-wise and therefore matches equality of the
/// canonical strings; precedence, which ignores build metadata, lives with the
/// comparison operators instead of an `Ord` impl.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(DeserializeFromStr, SerializeDisplay))]
pub struct Version {
    major: NumericIdentifier,
    minor: NumericIdentifier,
    patch: NumericIdentifier,
    pre_release: Prerelease,
    build_metadata: BuildMetadata,
}

impl Version {
    /// Builds a version from its five components. `pre_release` and `build` may
    /// be empty.
    pub fn new(
        major: impl Into<String>,
        minor: impl Into<String>,
        patch: impl Into<String>,
        pre_release: impl Into<String>,
        build: impl Into<String>,
    ) -> Result<Self, VersionError> {
        Self::new_in(
            Grammar::get(),
            major.into(),
            minor.into(),
            patch.into(),
            pre_release.into(),
            build.into(),
        )
    }

    fn new_in(
        grammar: &Grammar,
        major: String,
        minor: String,
        patch: String,
        pre_release: String,
        build: String,
    ) -> Result<Self, VersionError> {
        let major = NumericIdentifier::new_in(grammar, major)
            .map_err(|value| VersionError::InvalidMajor { value })?;
        let minor = NumericIdentifier::new_in(grammar, minor)
            .map_err(|value| VersionError::InvalidMinor { value })?;
        let patch = NumericIdentifier::new_in(grammar, patch)
            .map_err(|value| VersionError::InvalidPatch { value })?;
        let pre_release = Prerelease::new_in(grammar, pre_release)
            .map_err(|value| VersionError::InvalidPreRelease { value })?;
        let build_metadata = BuildMetadata::new_in(grammar, build)
            .map_err(|value| VersionError::InvalidBuildMetadata { value })?;

        Ok(Self {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }

    /// Parses a flat version string.
    ///
    /// Everything after the first `+` is build metadata. Of what is left,
    /// everything after the first `-` is the pre-release. The rest must be
    /// three dot-separated numbers.
    pub fn parse(text: &str) -> Result<Self, VersionError> {
        let (rest, build) = match text.split_once('+') {
            Some((_, "")) => {
                return Err(VersionError::InvalidBuildMetadata {
                    value: String::new(),
                });
            }
            Some(split) => split,
            None => (text, ""),
        };
        let (core, pre_release) = match rest.split_once('-') {
            Some((_, "")) => {
                return Err(VersionError::InvalidPreRelease {
                    value: String::new(),
                });
            }
            Some(split) => split,
            None => (rest, ""),
        };

        let mut numbers = core.splitn(3, '.');
        let (Some(major), Some(minor), Some(patch)) =
            (numbers.next(), numbers.next(), numbers.next())
        else {
            return Err(VersionError::TooShort {
                version: text.to_string(),
            });
        };

        Self::new(major, minor, patch, pre_release, build)
    }

    pub fn major(&self) -> &NumericIdentifier {
        &self.major
    }

    pub fn minor(&self) -> &NumericIdentifier {
        &self.minor
    }

    pub fn patch(&self) -> &NumericIdentifier {
        &self.patch
    }

    pub fn pre_release(&self) -> &Prerelease {
        &self.pre_release
    }

    pub fn build_metadata(&self) -> &BuildMetadata {
        &self.build_metadata
    }

    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// `MAJOR.MINOR.PATCH`, without pre-release or build metadata.
    pub fn base_string(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// `[major, minor, patch, pre_release, build_metadata]`, in that order.
    /// Absent extensions are empty strings.
    pub fn identifier_sequence(&self) -> [&str; 5] {
        [
            self.major.as_str(),
            self.minor.as_str(),
            self.patch.as_str(),
            self.pre_release.as_str(),
            self.build_metadata.as_str(),
        ]
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release)?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}

impl TryFrom<&str> for Version {
    type Error = VersionError;

    fn try_from(s: &str) -> Result<Self, VersionError> {
        Version::parse(s)
    }
}
