//! Index page rendering.
//!
//! The index template carries four literal markers that are each substituted
//! exactly once with generated content.

use crate::error::{DocsPublishError, Result};

/// Marker replaced with the stable version link list
pub const STABLE_MARKER: &str = "{stable_versions}";
/// Marker replaced with the snapshot version link list
pub const SNAPSHOT_MARKER: &str = "{snapshot_versions}";
/// Marker replaced with the latest stable release label
pub const LATEST_RELEASE_MARKER: &str = "{latest_release}";
/// Marker replaced with the latest snapshot label
pub const LATEST_SNAPSHOT_MARKER: &str = "{latest_snapshot}";

/// Substitute the four index markers.
///
/// Fragments are joined with newlines in the order given. Each marker is
/// substituted exactly once; a template missing any marker fails with
/// `TemplateMarkerMissing` before anything is substituted.
pub fn render_index(
    template: &str,
    stable_fragments: &[String],
    snapshot_fragments: &[String],
    latest_release: &str,
    latest_snapshot: &str,
) -> Result<String> {
    for marker in [
        STABLE_MARKER,
        SNAPSHOT_MARKER,
        LATEST_RELEASE_MARKER,
        LATEST_SNAPSHOT_MARKER,
    ] {
        if !template.contains(marker) {
            return Err(DocsPublishError::template(marker));
        }
    }

    let rendered = template
        .replacen(STABLE_MARKER, &stable_fragments.join("\n"), 1)
        .replacen(SNAPSHOT_MARKER, &snapshot_fragments.join("\n"), 1)
        .replacen(LATEST_RELEASE_MARKER, latest_release, 1)
        .replacen(LATEST_SNAPSHOT_MARKER, latest_snapshot, 1);

    Ok(rendered)
}
