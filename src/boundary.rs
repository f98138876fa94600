use std::fmt;

/// Warnings for non-fatal conditions met while assembling the release index.
/// These should be reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// A version's docs bundle could not be fetched or extracted
    ArtifactSkipped { tag: String, reason: String },
    /// No stable release exists in the fetched tag set
    NoStableRelease,
    /// A release line is represented by a lower micro than intended
    GroupFallback { wanted: String, published: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::ArtifactSkipped { tag, reason } => {
                write!(f, "Skipping version '{}': {}", tag, reason)
            }
            BoundaryWarning::NoStableRelease => {
                write!(f, "No stable release found; the index will show 'n/a'")
            }
            BoundaryWarning::GroupFallback { wanted, published } => {
                write!(
                    f,
                    "No docs bundle for '{}'; publishing '{}' for its release line instead",
                    wanted, published
                )
            }
        }
    }
}
