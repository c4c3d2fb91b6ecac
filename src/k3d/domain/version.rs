//! Tool version parsing and the compatibility range check.

use super::{IncompatibleVersionError, ParseToolVersionError};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Matches the first `MAJOR.MINOR.PATCH` token, with an optional `v` prefix.
static VERSION_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"\bv?(\d+)\.(\d+)\.(\d+)"));

/// Version reported by the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToolVersion {
    major: u64,
    minor: u64,
    patch: u64,
}

impl ToolVersion {
    /// Creates a version from its components.
    #[must_use]
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extracts the first version token from free-form tool output.
    ///
    /// Pre-release and build suffixes after the patch number are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ParseToolVersionError`] when no version token is present.
    pub fn parse_first(output: &str) -> Result<Self, ParseToolVersionError> {
        let pattern = VERSION_PATTERN
            .as_ref()
            .map_err(|err| ParseToolVersionError(err.to_string()))?;

        pattern
            .captures_iter(output)
            .find_map(|captures| {
                let component = |index: usize| captures.get(index)?.as_str().parse::<u64>().ok();
                Some(Self::new(component(1)?, component(2)?, component(3)?))
            })
            .ok_or_else(|| ParseToolVersionError(output.trim().to_owned()))
    }

    /// Returns the major component.
    #[must_use]
    pub const fn major(self) -> u64 {
        self.major
    }

    /// Returns the minor component.
    #[must_use]
    pub const fn minor(self) -> u64 {
        self.minor
    }

    /// Returns the patch component.
    #[must_use]
    pub const fn patch(self) -> u64 {
        self.patch
    }
}

impl fmt::Display for ToolVersion {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Supported version range: an exact major and a minimum minor.
///
/// The patch component never affects compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VersionRequirement {
    major: u64,
    min_minor: u64,
}

impl VersionRequirement {
    /// Creates a requirement for `major` with at least `min_minor`.
    #[must_use]
    pub const fn new(major: u64, min_minor: u64) -> Self {
        Self { major, min_minor }
    }

    /// Returns the required major component.
    #[must_use]
    pub const fn major(self) -> u64 {
        self.major
    }

    /// Returns the lowest accepted minor component.
    #[must_use]
    pub const fn min_minor(self) -> u64 {
        self.min_minor
    }

    /// Returns whether `version` falls inside the range.
    #[must_use]
    pub const fn is_satisfied_by(self, version: ToolVersion) -> bool {
        version.major == self.major && version.minor >= self.min_minor
    }

    /// Checks `version` against the range.
    ///
    /// # Errors
    ///
    /// Returns [`IncompatibleVersionError`] when the major differs or the
    /// minor is below the minimum.
    pub const fn check(self, version: ToolVersion) -> Result<(), IncompatibleVersionError> {
        if self.is_satisfied_by(version) {
            Ok(())
        } else {
            Err(IncompatibleVersionError {
                found: version,
                required: self,
            })
        }
    }
}

impl Default for VersionRequirement {
    fn default() -> Self {
        Self::new(5, 0)
    }
}

impl fmt::Display for VersionRequirement {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            ">={}.{}, <{}.0",
            self.major,
            self.min_minor,
            self.major.saturating_add(1)
        )
    }
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "Test code uses expect for assertion clarity")]
mod tests {
    use super::{ToolVersion, VersionRequirement};
    use rstest::rstest;

    #[test]
    fn parses_k3d_version_output() {
        let output = "k3d version v5.4.6\nk3s version v1.24.4-k3s1 (default)\n";

        let version = ToolVersion::parse_first(output).expect("version should parse");

        assert_eq!(version, ToolVersion::new(5, 4, 6));
    }

    #[rstest]
    #[case("5.0.1", ToolVersion::new(5, 0, 1))]
    #[case("k3d version v4.4.8-rc.1+build", ToolVersion::new(4, 4, 8))]
    #[case("version: 12.30.0 (abc)", ToolVersion::new(12, 30, 0))]
    fn parses_first_version_token(#[case] output: &str, #[case] expected: ToolVersion) {
        assert_eq!(ToolVersion::parse_first(output), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("k3d version unknown")]
    #[case("k3d version v5.4")]
    fn missing_version_is_a_parse_error(#[case] output: &str) {
        assert!(ToolVersion::parse_first(output).is_err());
    }

    #[rstest]
    #[case(ToolVersion::new(5, 3, 0), true)]
    #[case(ToolVersion::new(5, 9, 2), true)]
    #[case(ToolVersion::new(5, 2, 99), false)]
    #[case(ToolVersion::new(4, 9, 0), false)]
    #[case(ToolVersion::new(6, 3, 0), false)]
    fn requirement_pins_major_and_bounds_minor(
        #[case] version: ToolVersion,
        #[case] compatible: bool,
    ) {
        let requirement = VersionRequirement::new(5, 3);
        assert_eq!(requirement.is_satisfied_by(version), compatible);
        assert_eq!(requirement.check(version).is_ok(), compatible);
    }

    #[test]
    fn incompatible_version_names_the_range() {
        let requirement = VersionRequirement::new(5, 3);

        let error = requirement
            .check(ToolVersion::new(4, 9, 0))
            .expect_err("major mismatch should fail");

        assert!(error.to_string().contains("4.9.0"));
        assert!(error.to_string().contains(">=5.3, <6.0"));
    }
}
