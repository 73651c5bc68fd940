use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ReleaseNotesError, Result};

/// Name of the project-local configuration file.
pub const LOCAL_CONFIG_FILE: &str = "releasenotes.toml";

/// Name of the per-user configuration file inside the user config directory.
pub const USER_CONFIG_FILE: &str = ".releasenotes.toml";

/// Represents the complete configuration for release-notes.
///
/// Contains the hosting repository used for links, the reference resolution
/// settings and where the rendered notes are written.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,

    #[serde(default)]
    pub resolution: ResolutionConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_repository_url() -> String {
    "https://github.com/TranPhuong319/AppLocker".to_string()
}

/// Hosting repository used to build commit and comparison links.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RepositoryConfig {
    #[serde(default = "default_repository_url")]
    pub url: String,
}

impl RepositoryConfig {
    /// Base URL for commit links, e.g. `https://host/owner/repo/commit/`
    pub fn commit_base_url(&self) -> String {
        format!("{}/commit/", self.url.trim_end_matches('/'))
    }

    /// Base URL for comparison links, e.g. `https://host/owner/repo/compare/`
    pub fn compare_base_url(&self) -> String {
        format!("{}/compare/", self.url.trim_end_matches('/'))
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        RepositoryConfig {
            url: default_repository_url(),
        }
    }
}

fn default_trunk_branch() -> String {
    "main".to_string()
}

fn default_unstable_tag_marker() -> String {
    "alpha".to_string()
}

/// Settings for resolving the start of the release range.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ResolutionConfig {
    /// Branch that releases are cut from
    #[serde(default = "default_trunk_branch")]
    pub trunk_branch: String,

    /// Tags containing this marker (case-insensitive) are never used as a start reference
    #[serde(default = "default_unstable_tag_marker")]
    pub unstable_tag_marker: String,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        ResolutionConfig {
            trunk_branch: default_trunk_branch(),
            unstable_tag_marker: default_unstable_tag_marker(),
        }
    }
}

fn default_notes_file() -> String {
    "ReleaseNotes.md".to_string()
}

fn default_html_file() -> String {
    "changelog_body.html".to_string()
}

fn default_has_changes_key() -> String {
    "HAS_CHANGES".to_string()
}

/// Where rendered notes go and how the CI signal is named.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Markdown file, appended to on every run
    #[serde(default = "default_notes_file")]
    pub notes_file: String,

    /// HTML file, overwritten on every run
    #[serde(default = "default_html_file")]
    pub html_file: String,

    #[serde(default = "default_has_changes_key")]
    pub has_changes_key: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            notes_file: default_notes_file(),
            html_file: default_html_file(),
            has_changes_key: default_has_changes_key(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasenotes.toml` in current directory
/// 3. `.releasenotes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        Path::new(path).to_path_buf()
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        Path::new(LOCAL_CONFIG_FILE).to_path_buf()
    } else if let Some(config_dir) = dirs::config_dir() {
        let user_path = config_dir.join(USER_CONFIG_FILE);
        if user_path.exists() {
            user_path
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseNotesError::config(format!("Cannot read '{}': {}", path.display(), e))
    })?;

    parse_config(&config_str)
        .map_err(|e| ReleaseNotesError::config(format!("Invalid '{}': {}", path.display(), e)))
}

/// Parses a configuration document, filling every missing key with its default.
pub fn parse_config(source: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(source)
}
