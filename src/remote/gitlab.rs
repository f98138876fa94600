use crate::error::{DocsPublishError, Result};
use crate::remote::DocsHost;
use serde::Deserialize;
use std::time::Duration;

/// Page size for tag listing requests
const PER_PAGE: usize = 100;

/// Tag reference entry as returned by the hosting API
#[derive(Debug, Deserialize)]
struct TagRef {
    name: String,
}

/// GitLab REST API implementation of [DocsHost].
///
/// Talks to `/api/v4` of a GitLab-style server with a blocking HTTP client.
/// The API token is injected at construction; it is never read from the
/// environment here.
pub struct GitLabHost {
    client: reqwest::blocking::Client,
    server: String,
    project: String,
    artifact_job: String,
    token: Option<String>,
}

impl GitLabHost {
    /// Create a host client for one project.
    ///
    /// # Arguments
    /// * `server` - Base server URL (e.g. "https://gitlab.com")
    /// * `project` - Project path, "namespace/name"
    /// * `artifact_job` - Name of the CI job that publishes the docs bundle
    /// * `token` - Optional API credential, sent as the `PRIVATE-TOKEN` header
    /// * `timeout` - Bound applied to each network fetch
    pub fn new(
        server: impl Into<String>,
        project: impl Into<String>,
        artifact_job: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;

        Ok(GitLabHost {
            client,
            server: server.into().trim_end_matches('/').to_string(),
            project: project.into(),
            artifact_job: artifact_job.into(),
            token,
        })
    }

    /// Project path with the namespace separator URL-encoded
    fn encoded_project(&self) -> String {
        self.project.replace('/', "%2F")
    }

    fn tags_url(&self, page: usize) -> String {
        format!(
            "{}/api/v4/projects/{}/repository/tags?per_page={}&page={}",
            self.server,
            self.encoded_project(),
            PER_PAGE,
            page
        )
    }

    fn artifact_url(&self, tag: &str) -> String {
        format!(
            "{}/api/v4/projects/{}/jobs/artifacts/{}/download?job={}",
            self.server,
            self.encoded_project(),
            tag,
            self.artifact_job
        )
    }

    fn authorized(&self, request: reqwest::blocking::RequestBuilder) -> reqwest::blocking::RequestBuilder {
        match &self.token {
            Some(token) => request.header("PRIVATE-TOKEN", token),
            None => request,
        }
    }
}

impl DocsHost for GitLabHost {
    fn list_tags(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut page = 1;

        loop {
            let url = self.tags_url(page);
            let response = self
                .authorized(self.client.get(&url))
                .send()
                .map_err(|e| {
                    DocsPublishError::remote(format!("cannot list tags from {}: {}", url, e))
                })?;

            let status = response.status();
            let body = response.text().map_err(|e| {
                DocsPublishError::remote(format!("cannot read tag listing from {}: {}", url, e))
            })?;

            if !status.is_success() {
                return Err(DocsPublishError::remote(format!(
                    "tag listing returned {} for {}",
                    status, url
                )));
            }

            let refs: Vec<TagRef> = serde_json::from_str(&body).map_err(|e| {
                DocsPublishError::remote(format!("malformed tag listing from {}: {}", url, e))
            })?;

            let count = refs.len();
            names.extend(refs.into_iter().map(|tag| tag.name));

            if count < PER_PAGE {
                break;
            }
            page += 1;
        }

        Ok(names)
    }

    fn fetch_artifact(&self, tag: &str) -> Result<Vec<u8>> {
        let url = self.artifact_url(tag);
        let response = self.authorized(self.client.get(&url)).send().map_err(|e| {
            DocsPublishError::artifact(format!("cannot fetch docs bundle for '{}': {}", tag, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DocsPublishError::artifact(format!(
                "docs bundle for '{}' returned {}",
                tag, status
            )));
        }

        let bytes = response.bytes().map_err(|e| {
            DocsPublishError::artifact(format!("cannot read docs bundle for '{}': {}", tag, e))
        })?;

        Ok(bytes.to_vec())
    }
}
