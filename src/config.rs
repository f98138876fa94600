use crate::error::{DocsPublishError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for docs-publish.
///
/// Contains the remote host coordinates, publishing layout, and optional
/// lifecycle hook scripts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub remote: RemoteConfig,

    #[serde(default)]
    pub publish: PublishConfig,

    #[serde(default)]
    pub hooks: HooksConfig,
}

/// Returns the default hosting server URL.
fn default_server() -> String {
    "https://gitlab.com".to_string()
}

/// Returns the default project path on the hosting server.
fn default_project() -> String {
    "buildstream/buildstream".to_string()
}

/// Returns the default CI job name that publishes docs bundles.
fn default_artifact_job() -> String {
    "docs".to_string()
}

/// Returns the default per-fetch network timeout in seconds.
fn default_timeout_secs() -> u64 {
    30
}

/// Configuration for the remote documentation host.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RemoteConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_project")]
    pub project: String,

    #[serde(default = "default_artifact_job")]
    pub artifact_job: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            server: default_server(),
            project: default_project(),
            artifact_job: default_artifact_job(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Returns the default output directory for the generated site.
fn default_output_dir() -> String {
    "public".to_string()
}

/// Returns the default index template path.
fn default_template() -> String {
    "index.html.tmpl".to_string()
}

/// Configuration for the generated site layout.
///
/// `unavailable_versions` lists version identifiers that must never be
/// published (broken tags, withdrawn releases); they are filtered out before
/// any other processing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PublishConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_template")]
    pub template: String,

    #[serde(default)]
    pub unavailable_versions: Vec<String>,
}

impl Default for PublishConfig {
    fn default() -> Self {
        PublishConfig {
            output_dir: default_output_dir(),
            template: default_template(),
            unavailable_versions: Vec::new(),
        }
    }
}

/// Optional lifecycle hook scripts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct HooksConfig {
    #[serde(default)]
    pub pre_build: Option<String>,

    #[serde(default)]
    pub post_build: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            remote: RemoteConfig::default(),
            publish: PublishConfig::default(),
            hooks: HooksConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `docspublish.toml` in current directory
/// 3. `.docspublish.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./docspublish.toml").exists() {
        fs::read_to_string("./docspublish.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".docspublish.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config =
        toml::from_str(&config_str).map_err(|e| DocsPublishError::config(e.to_string()))?;
    Ok(config)
}
