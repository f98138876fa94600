use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Types of hooks available in the docs-publish workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HookType {
    PreBuild,
    PostBuild,
}

impl HookType {
    /// Get the hook name as a string
    pub fn name(&self) -> &'static str {
        match self {
            HookType::PreBuild => "pre-build",
            HookType::PostBuild => "post-build",
        }
    }
}

/// Context information passed to a hook
#[derive(Debug, Clone)]
pub struct HookContext {
    /// Type of hook being executed
    pub hook_type: HookType,
    /// Directory the generated site was (or will be) written to
    pub output_dir: String,
    /// Versions published into the index, in processing order
    pub published: Vec<String>,
    /// Latest stable release, if one exists
    pub latest_release: Option<String>,
    /// Latest snapshot version
    pub latest_snapshot: Option<String>,
    /// Number of versions skipped because their bundle was unavailable
    pub skipped_count: usize,
}

impl HookContext {
    /// Convert context to environment variables for the hook script
    ///
    /// Maps context fields to DOCSPUBLISH_* environment variables
    pub fn to_env_vars(&self) -> HashMap<String, String> {
        let mut env = HashMap::new();

        env.insert(
            "DOCSPUBLISH_OUTPUT_DIR".to_string(),
            self.output_dir.clone(),
        );
        env.insert(
            "DOCSPUBLISH_PUBLISHED".to_string(),
            self.published.join(" "),
        );
        env.insert(
            "DOCSPUBLISH_SKIPPED_COUNT".to_string(),
            self.skipped_count.to_string(),
        );

        if let Some(ref release) = self.latest_release {
            env.insert("DOCSPUBLISH_LATEST_RELEASE".to_string(), release.clone());
        }

        if let Some(ref snapshot) = self.latest_snapshot {
            env.insert("DOCSPUBLISH_LATEST_SNAPSHOT".to_string(), snapshot.clone());
        }

        env
    }
}
