use crate::domain::{Tag, Version, VersionClass};
use crate::error::{DocsPublishError, Result};
use std::collections::HashSet;

/// Versions sharing the same (major, minor) release line.
///
/// Micros are kept in descending order: the head is the line's
/// representative, the tail is the fallback chain when the representative
/// has no published documentation bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MajorMinorGroup {
    pub major: u32,
    pub minor: u32,
    pub versions: Vec<Version>,
}

impl MajorMinorGroup {
    /// The highest micro version of this line
    pub fn representative(&self) -> Version {
        self.versions[0]
    }
}

/// Selects and orders the version tags worth publishing
pub struct ReleaseAnalyzer {
    unavailable_versions: Vec<String>,
}

impl ReleaseAnalyzer {
    /// Create a new analyzer with a list of version identifiers to exclude
    pub fn new(unavailable_versions: Vec<String>) -> Self {
        ReleaseAnalyzer {
            unavailable_versions,
        }
    }

    /// Turn a raw remote tag listing into an ordered sequence of release tags.
    ///
    /// Deduplicates (keeping the first occurrence), keeps only strict `N.N.N`
    /// names, drops versions marked unavailable, and reverses the listing
    /// order so the most-recently-created tag comes first.
    ///
    /// # Returns
    /// * `Ok(Vec<Tag>)` - Filtered tags, newest first
    /// * `Err(EmptyResult)` - If no tag survives filtering
    pub fn select_tags(&self, raw_names: &[String]) -> Result<Vec<Tag>> {
        let mut seen = HashSet::new();
        let mut selected = Vec::new();

        for name in raw_names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            if !Version::matches_shape(name) {
                continue;
            }
            if self.unavailable_versions.iter().any(|v| v == name) {
                continue;
            }
            selected.push(Tag::Release(Version::parse(name)?));
        }

        selected.reverse();

        if selected.is_empty() {
            return Err(DocsPublishError::empty(
                "no version tags left after filtering the remote listing",
            ));
        }

        Ok(selected)
    }

    /// Group release tags by (major, minor) line.
    ///
    /// Groups appear in the order their line was first encountered; micros
    /// within a group are sorted descending.
    pub fn minor_groups(&self, tags: &[Tag]) -> Vec<MajorMinorGroup> {
        let mut groups: Vec<MajorMinorGroup> = Vec::new();

        for version in tags.iter().filter_map(Tag::version) {
            match groups.iter_mut().find(|g| (g.major, g.minor) == version.line()) {
                Some(group) => group.versions.push(version),
                None => groups.push(MajorMinorGroup {
                    major: version.major,
                    minor: version.minor,
                    versions: vec![version],
                }),
            }
        }

        for group in &mut groups {
            group.versions.sort_unstable_by(|a, b| b.cmp(a));
        }

        groups
    }

    /// One representative tag per (major, minor) line, preceded by master.
    ///
    /// The representative is the highest micro seen for the line; master is
    /// always included regardless of the input.
    pub fn latest_per_line(&self, tags: &[Tag]) -> Vec<Tag> {
        let mut result = vec![Tag::Master];
        result.extend(
            self.minor_groups(tags)
                .iter()
                .map(|group| Tag::Release(group.representative())),
        );
        result
    }

    /// The most recent stable release, if any.
    ///
    /// Scans the fetched (newest-first) order and returns the first non-master
    /// tag classified as stable.
    pub fn latest_release(&self, tags: &[Tag]) -> Option<Tag> {
        tags.iter()
            .copied()
            .find(|tag| *tag != Tag::Master && tag.classify() == VersionClass::Stable)
    }

    /// The most recent tag in fetched order, regardless of classification
    pub fn latest_snapshot(&self, tags: &[Tag]) -> Option<Tag> {
        tags.first().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn release(major: u32, minor: u32, micro: u32) -> Tag {
        Tag::Release(Version::new(major, minor, micro))
    }

    #[test]
    fn test_select_tags_filters_and_reverses() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let raw = names(&["1.0.0", "not-a-version", "1.1.0", "1.2.0"]);

        let tags = analyzer.select_tags(&raw).unwrap();
        assert_eq!(
            tags,
            vec![release(1, 2, 0), release(1, 1, 0), release(1, 0, 0)]
        );
    }

    #[test]
    fn test_select_tags_deduplicates() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let raw = names(&["1.0.0", "1.0.0", "1.1.0"]);

        let tags = analyzer.select_tags(&raw).unwrap();
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_select_tags_applies_exclusions() {
        let analyzer = ReleaseAnalyzer::new(vec!["1.1.7".to_string()]);
        let raw = names(&["1.1.6", "1.1.7", "1.2.0"]);

        let tags = analyzer.select_tags(&raw).unwrap();
        assert!(!tags.contains(&release(1, 1, 7)));
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_select_tags_empty_is_an_error() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let raw = names(&["main", "release-candidate"]);

        let result = analyzer.select_tags(&raw);
        assert!(matches!(result, Err(DocsPublishError::EmptyResult(_))));
    }

    #[test]
    fn test_minor_groups_order_and_micros() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let tags = vec![
            release(1, 4, 1),
            release(1, 2, 0),
            release(1, 2, 5),
            release(1, 2, 3),
        ];

        let groups = analyzer.minor_groups(&tags);
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].major, groups[0].minor), (1, 4));
        assert_eq!((groups[1].major, groups[1].minor), (1, 2));
        assert_eq!(
            groups[1].versions,
            vec![
                Version::new(1, 2, 5),
                Version::new(1, 2, 3),
                Version::new(1, 2, 0)
            ]
        );
    }

    #[test]
    fn test_latest_per_line_picks_max_micro() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let tags = vec![release(1, 2, 0), release(1, 2, 3), release(1, 2, 5)];

        let latest = analyzer.latest_per_line(&tags);
        assert_eq!(latest, vec![Tag::Master, release(1, 2, 5)]);
    }

    #[test]
    fn test_latest_per_line_always_has_one_master() {
        let analyzer = ReleaseAnalyzer::new(vec![]);

        for tags in [
            vec![],
            vec![release(1, 2, 0)],
            vec![release(1, 3, 0), release(2, 0, 0)],
        ] {
            let latest = analyzer.latest_per_line(&tags);
            let masters = latest.iter().filter(|t| **t == Tag::Master).count();
            assert_eq!(masters, 1);
            assert_eq!(latest[0], Tag::Master);
        }
    }

    #[test]
    fn test_latest_release_first_stable_in_order() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let tags = vec![release(1, 3, 1), release(1, 2, 5), release(1, 2, 0)];

        assert_eq!(analyzer.latest_release(&tags), Some(release(1, 2, 5)));
    }

    #[test]
    fn test_latest_release_none_when_all_snapshots() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let tags = vec![release(1, 1, 1), release(1, 3, 1)];

        assert_eq!(analyzer.latest_release(&tags), None);
    }

    #[test]
    fn test_latest_snapshot_is_first_full_identifier() {
        let analyzer = ReleaseAnalyzer::new(vec![]);
        let tags = vec![release(1, 13, 100), release(1, 12, 0)];

        let latest = analyzer.latest_snapshot(&tags).unwrap();
        assert_eq!(latest.to_string(), "1.13.100");
    }
}
