use crate::domain::Version;
use crate::error::Result;
use std::fmt;

/// A publishable documentation line: a tagged release or the rolling master
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Master,
    Release(Version),
}

/// Classification of a version line by the project's release convention
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionClass {
    Stable,
    Snapshot,
}

impl Tag {
    /// Parse a tag name: the literal "master" or an `N.N.N` version
    pub fn parse(name: &str) -> Result<Self> {
        if name == "master" {
            return Ok(Tag::Master);
        }
        Ok(Tag::Release(Version::parse(name)?))
    }

    /// Classify the tag as stable or snapshot.
    ///
    /// Stable versions are all even minor versions; master is always a
    /// snapshot.
    pub fn classify(&self) -> VersionClass {
        match self {
            Tag::Master => VersionClass::Snapshot,
            Tag::Release(version) => {
                if version.minor % 2 == 0 {
                    VersionClass::Stable
                } else {
                    VersionClass::Snapshot
                }
            }
        }
    }

    /// The release version, if this is not master
    pub fn version(&self) -> Option<Version> {
        match self {
            Tag::Master => None,
            Tag::Release(version) => Some(*version),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Master => write!(f, "master"),
            Tag::Release(version) => write!(f, "{}", version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_parse_master() {
        assert_eq!(Tag::parse("master").unwrap(), Tag::Master);
    }

    #[test]
    fn test_tag_parse_release() {
        let tag = Tag::parse("1.2.3").unwrap();
        assert_eq!(tag, Tag::Release(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_tag_parse_invalid() {
        assert!(Tag::parse("main").is_err());
        assert!(Tag::parse("1.2").is_err());
        assert!(Tag::parse("").is_err());
    }

    #[test]
    fn test_classify_master_is_snapshot() {
        assert_eq!(Tag::Master.classify(), VersionClass::Snapshot);
    }

    #[test]
    fn test_classify_even_minor_is_stable() {
        let tag = Tag::Release(Version::new(1, 2, 0));
        assert_eq!(tag.classify(), VersionClass::Stable);

        let tag = Tag::Release(Version::new(2, 0, 1));
        assert_eq!(tag.classify(), VersionClass::Stable);
    }

    #[test]
    fn test_classify_odd_minor_is_snapshot() {
        let tag = Tag::Release(Version::new(1, 3, 0));
        assert_eq!(tag.classify(), VersionClass::Snapshot);

        let tag = Tag::Release(Version::new(1, 11, 2));
        assert_eq!(tag.classify(), VersionClass::Snapshot);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let tags = vec![
            Tag::Master,
            Tag::Release(Version::new(1, 2, 3)),
            Tag::Release(Version::new(1, 3, 0)),
        ];

        for tag in tags {
            assert_eq!(tag.classify(), tag.classify());
        }
    }

    #[test]
    fn test_tag_display() {
        assert_eq!(Tag::Master.to_string(), "master");
        assert_eq!(Tag::Release(Version::new(1, 2, 3)).to_string(), "1.2.3");
    }

    #[test]
    fn test_tag_version() {
        assert_eq!(Tag::Master.version(), None);
        assert_eq!(
            Tag::Release(Version::new(1, 2, 3)).version(),
            Some(Version::new(1, 2, 3))
        );
    }
}
