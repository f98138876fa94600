use crate::error::{DocsPublishError, Result};
use std::fmt;

/// Semantic version of a documentation release
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// Create a new version
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Version {
            major,
            minor,
            micro,
        }
    }

    /// Parse a version from a tag name (e.g., "1.2.3" -> Version(1,2,3))
    ///
    /// Only the strict numeric `N.N.N` shape is accepted. Components may have
    /// multiple digits; pre-release or build suffixes are rejected.
    pub fn parse(tag: &str) -> Result<Self> {
        if !Self::matches_shape(tag) {
            return Err(DocsPublishError::version(format!(
                "'{}' is not a valid version - expected N.N.N",
                tag
            )));
        }

        let parts: Vec<&str> = tag.split('.').collect();

        let major = parts[0].parse::<u32>().map_err(|_| {
            DocsPublishError::version(format!("Invalid major version: {}", parts[0]))
        })?;
        let minor = parts[1].parse::<u32>().map_err(|_| {
            DocsPublishError::version(format!("Invalid minor version: {}", parts[1]))
        })?;
        let micro = parts[2].parse::<u32>().map_err(|_| {
            DocsPublishError::version(format!("Invalid micro version: {}", parts[2]))
        })?;

        Ok(Version {
            major,
            minor,
            micro,
        })
    }

    /// Test whether a string has the `N.N.N` version shape
    pub fn matches_shape(tag: &str) -> bool {
        regex::Regex::new(r"^\d+\.\d+\.\d+$")
            .map(|re| re.is_match(tag))
            .unwrap_or(false)
    }

    /// The (major, minor) release line this version belongs to
    pub fn line(&self) -> (u32, u32) {
        (self.major, self.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.micro, 3);
    }

    #[test]
    fn test_version_parse_multi_digit() {
        let v = Version::parse("1.12.10").unwrap();
        assert_eq!(v, Version::new(1, 12, 10));
    }

    #[test]
    fn test_version_parse_invalid() {
        assert!(Version::parse("1.2").is_err());
        assert!(Version::parse("1.2.3.4").is_err());
        assert!(Version::parse("v1.2.3").is_err());
        assert!(Version::parse("1.2.3-rc1").is_err());
        assert!(Version::parse("master").is_err());
    }

    #[test]
    fn test_version_shape() {
        assert!(Version::matches_shape("0.0.1"));
        assert!(Version::matches_shape("10.20.30"));
        assert!(!Version::matches_shape("1.2"));
        assert!(!Version::matches_shape("1.2.x"));
        assert!(!Version::matches_shape("release-1.2.3"));
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(1, 2, 5) > Version::new(1, 2, 3));
        assert!(Version::new(1, 4, 0) > Version::new(1, 2, 9));
        // Numeric, not lexicographic: 1.2.10 > 1.2.9
        assert!(Version::new(1, 2, 10) > Version::new(1, 2, 9));
    }

    #[test]
    fn test_version_line() {
        assert_eq!(Version::new(1, 2, 3).line(), (1, 2));
        assert_eq!(Version::new(1, 2, 5).line(), (1, 2));
    }

    #[test]
    fn test_version_display() {
        let v = Version::new(1, 2, 3);
        assert_eq!(v.to_string(), "1.2.3");
    }
}
