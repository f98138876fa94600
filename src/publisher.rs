//! Release index assembly.
//!
//! [ReleaseIndexBuilder] drives the whole build: tag selection, per-version
//! bundle downloads with partial-failure recovery, and index rendering. It
//! never prints; callers report the returned [PublishReport] and its
//! warnings.

use std::fs;
use std::path::Path;

use crate::analyzer::{MajorMinorGroup, ReleaseAnalyzer};
use crate::boundary::BoundaryWarning;
use crate::bundle;
use crate::config::Config;
use crate::domain::{Tag, VersionClass};
use crate::error::{DocsPublishError, Result};
use crate::remote::DocsHost;
use crate::render;

/// Label rendered for a latest-version marker with no value
const NO_VERSION_LABEL: &str = "n/a";

/// The versions selected for publishing, before any download happens
#[derive(Debug, Clone, PartialEq)]
pub struct PublishPlan {
    /// All selected tags, newest first
    pub tags: Vec<Tag>,
    /// Entries to publish: master plus one representative per release line
    pub entries: Vec<Tag>,
    /// Release lines with their fallback micros
    pub groups: Vec<MajorMinorGroup>,
    /// Most recent stable release, if any
    pub latest_release: Option<Tag>,
    /// Most recent tag overall
    pub latest_snapshot: Option<Tag>,
}

/// Outcome of one index build
#[derive(Debug, Clone, PartialEq)]
pub struct PublishReport {
    /// Versions whose docs made it into the index, in processing order
    pub published: Vec<Tag>,
    /// Versions skipped, with the reason for each
    pub skipped: Vec<(String, String)>,
    pub latest_release: Option<Tag>,
    pub latest_snapshot: Option<Tag>,
    /// Non-fatal conditions met during the build
    pub warnings: Vec<BoundaryWarning>,
}

/// Builds the release documentation index from a remote docs host
pub struct ReleaseIndexBuilder<'a> {
    host: &'a dyn DocsHost,
    config: &'a Config,
}

impl<'a> ReleaseIndexBuilder<'a> {
    /// Create a builder over a host and configuration
    pub fn new(host: &'a dyn DocsHost, config: &'a Config) -> Self {
        ReleaseIndexBuilder { host, config }
    }

    /// Fetch the remote tag listing and compute the publish plan.
    ///
    /// Has no side effects; this is the whole of `--dry-run`.
    ///
    /// # Returns
    /// * `Ok(PublishPlan)` - Selected versions and computed latest labels
    /// * `Err(RemoteUnavailable)` - Remote could not be listed
    /// * `Err(EmptyResult)` - No publishable version tag exists
    pub fn plan(&self) -> Result<PublishPlan> {
        let raw_names = self.host.list_tags()?;

        let analyzer = ReleaseAnalyzer::new(self.config.publish.unavailable_versions.clone());
        let tags = analyzer.select_tags(&raw_names)?;
        let groups = analyzer.minor_groups(&tags);
        let entries = analyzer.latest_per_line(&tags);
        let latest_release = analyzer.latest_release(&tags);
        let latest_snapshot = analyzer.latest_snapshot(&tags);

        Ok(PublishPlan {
            tags,
            entries,
            groups,
            latest_release,
            latest_snapshot,
        })
    }

    /// Plan and execute in one step
    pub fn build(&self) -> Result<PublishReport> {
        let plan = self.plan()?;
        self.execute(&plan)
    }

    /// Download and extract every planned version, then render the index.
    ///
    /// A version whose bundle is unavailable is skipped and reported; the
    /// run only fails when nothing at all could be published, when the
    /// template is missing a marker, or on output I/O errors.
    pub fn execute(&self, plan: &PublishPlan) -> Result<PublishReport> {
        let output_dir = Path::new(&self.config.publish.output_dir);
        fs::create_dir_all(output_dir)?;

        let mut published = Vec::new();
        let mut skipped = Vec::new();
        let mut warnings = Vec::new();
        let mut stable_fragments = Vec::new();
        let mut snapshot_fragments = Vec::new();

        for entry in &plan.entries {
            match self.build_version_entry(*entry, &plan.groups, output_dir, &mut warnings) {
                Ok(tag) => {
                    let fragment = bundle::version_entry_fragment(&tag.to_string());
                    match tag.classify() {
                        VersionClass::Stable => stable_fragments.push(fragment),
                        VersionClass::Snapshot => snapshot_fragments.push(fragment),
                    }
                    published.push(tag);
                }
                Err(e) => {
                    let reason = e.to_string();
                    warnings.push(BoundaryWarning::ArtifactSkipped {
                        tag: entry.to_string(),
                        reason: reason.clone(),
                    });
                    skipped.push((entry.to_string(), reason));
                }
            }
        }

        if published.is_empty() {
            return Err(DocsPublishError::empty(
                "no version had a fetchable docs bundle",
            ));
        }

        if plan.latest_release.is_none() {
            warnings.push(BoundaryWarning::NoStableRelease);
        }

        let template = fs::read_to_string(&self.config.publish.template)?;
        let latest_release_label = plan
            .latest_release
            .map(|tag| tag.to_string())
            .unwrap_or_else(|| NO_VERSION_LABEL.to_string());
        let latest_snapshot_label = plan
            .latest_snapshot
            .map(|tag| tag.to_string())
            .unwrap_or_else(|| NO_VERSION_LABEL.to_string());

        let index = render::render_index(
            &template,
            &stable_fragments,
            &snapshot_fragments,
            &latest_release_label,
            &latest_snapshot_label,
        )?;
        fs::write(output_dir.join("index.html"), index)?;

        Ok(PublishReport {
            published,
            skipped,
            latest_release: plan.latest_release,
            latest_snapshot: plan.latest_snapshot,
            warnings,
        })
    }

    /// Fetch and extract docs for one planned entry.
    ///
    /// A release entry falls back through the lower micros of its release
    /// line when the representative bundle is unavailable. Returns the tag
    /// that actually provided docs.
    fn build_version_entry(
        &self,
        entry: Tag,
        groups: &[MajorMinorGroup],
        output_dir: &Path,
        warnings: &mut Vec<BoundaryWarning>,
    ) -> Result<Tag> {
        let candidates: Vec<Tag> = match entry {
            Tag::Master => vec![Tag::Master],
            Tag::Release(version) => groups
                .iter()
                .find(|group| (group.major, group.minor) == version.line())
                .map(|group| group.versions.iter().map(|v| Tag::Release(*v)).collect())
                .unwrap_or_else(|| vec![entry]),
        };

        let mut last_err = None;
        for candidate in candidates {
            match self.fetch_and_extract(candidate, output_dir) {
                Ok(()) => {
                    if candidate != entry {
                        warnings.push(BoundaryWarning::GroupFallback {
                            wanted: entry.to_string(),
                            published: candidate.to_string(),
                        });
                    }
                    return Ok(candidate);
                }
                Err(e) => last_err = Some(e),
            }
        }

        Err(last_err.unwrap_or_else(|| {
            DocsPublishError::artifact(format!("no candidate versions for '{}'", entry))
        }))
    }

    fn fetch_and_extract(&self, tag: Tag, output_dir: &Path) -> Result<()> {
        let name = tag.to_string();
        let data = self.host.fetch_artifact(&name)?;
        bundle::extract_bundle(&data, &output_dir.join(&name))
    }
}
