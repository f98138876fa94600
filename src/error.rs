use thiserror::Error;

/// Unified error type for docs-publish operations
#[derive(Error, Debug)]
pub enum DocsPublishError {
    #[error("Remote unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("No publishable versions: {0}")]
    EmptyResult(String),

    #[error("Invalid version format: {0}")]
    InvalidVersionFormat(String),

    #[error("Artifact unavailable: {0}")]
    ArtifactUnavailable(String),

    #[error("Template marker missing: {0}")]
    TemplateMarkerMissing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Hook error: {0}")]
    Hook(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in docs-publish
pub type Result<T> = std::result::Result<T, DocsPublishError>;

impl DocsPublishError {
    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        DocsPublishError::RemoteUnavailable(msg.into())
    }

    /// Create an empty-result error with context
    pub fn empty(msg: impl Into<String>) -> Self {
        DocsPublishError::EmptyResult(msg.into())
    }

    /// Create a version format error with context
    pub fn version(msg: impl Into<String>) -> Self {
        DocsPublishError::InvalidVersionFormat(msg.into())
    }

    /// Create an artifact error with context
    pub fn artifact(msg: impl Into<String>) -> Self {
        DocsPublishError::ArtifactUnavailable(msg.into())
    }

    /// Create a template error with context
    pub fn template(msg: impl Into<String>) -> Self {
        DocsPublishError::TemplateMarkerMissing(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DocsPublishError::Config(msg.into())
    }

    /// Create a hook error with context
    pub fn hook(msg: impl Into<String>) -> Self {
        DocsPublishError::Hook(msg.into())
    }
}
