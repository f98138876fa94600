use crate::error::{DocsPublishError, Result};
use crate::remote::DocsHost;
use std::collections::HashMap;

/// Mock docs host for testing without network access
pub struct MockHost {
    tags: Vec<String>,
    artifacts: HashMap<String, Vec<u8>>,
    unreachable: bool,
}

impl MockHost {
    /// Create a new empty mock host
    pub fn new() -> Self {
        MockHost {
            tags: Vec::new(),
            artifacts: HashMap::new(),
            unreachable: false,
        }
    }

    /// Add a tag to the listing, preserving insertion order
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Publish a docs bundle for a tag or ref
    pub fn add_artifact(&mut self, tag: impl Into<String>, bundle: Vec<u8>) {
        self.artifacts.insert(tag.into(), bundle);
    }

    /// Make the whole host unreachable (tag listing fails)
    pub fn set_unreachable(&mut self) {
        self.unreachable = true;
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl DocsHost for MockHost {
    fn list_tags(&self) -> Result<Vec<String>> {
        if self.unreachable {
            return Err(DocsPublishError::remote("mock host unreachable"));
        }
        Ok(self.tags.clone())
    }

    fn fetch_artifact(&self, tag: &str) -> Result<Vec<u8>> {
        self.artifacts.get(tag).cloned().ok_or_else(|| {
            DocsPublishError::artifact(format!("no docs bundle for '{}'", tag))
        })
    }
}
