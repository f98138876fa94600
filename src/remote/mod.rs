//! Remote documentation host abstraction
//!
//! This module provides a trait-based abstraction over the source-control
//! hosting service, allowing for multiple implementations including the real
//! GitLab REST API and a mock implementation for testing.
//!
//! The primary abstraction is the [DocsHost] trait. Concrete implementations:
//!
//! - [gitlab::GitLabHost]: the hosting service's HTTP API via `reqwest`
//! - [mock::MockHost]: an in-memory implementation for testing
//!
//! Most code should depend on the [DocsHost] trait rather than concrete
//! implementations to enable easy testing.

pub mod gitlab;
pub mod mock;

pub use gitlab::GitLabHost;
pub use mock::MockHost;

use crate::error::Result;

/// Read-only access to a project's tags and per-tag documentation bundles.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across
/// threads.
///
/// ## Error Handling
///
/// Implementations map transport failures to
/// [crate::error::DocsPublishError::RemoteUnavailable] for tag listing and
/// [crate::error::DocsPublishError::ArtifactUnavailable] for bundle fetches,
/// so callers can apply the right recovery policy to each.
pub trait DocsHost: Send + Sync {
    /// List all tag names of the project, in the remote's listing order.
    ///
    /// The raw names are returned unfiltered; selection and ordering policy
    /// live in [crate::analyzer::ReleaseAnalyzer].
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Download the documentation bundle published for a tag.
    ///
    /// Returns the raw bytes of a gzip-compressed tar archive.
    ///
    /// # Arguments
    /// * `tag` - Tag name or ref the bundle was built for (e.g. "1.2.3",
    ///   "master")
    fn fetch_artifact(&self, tag: &str) -> Result<Vec<u8>>;
}
