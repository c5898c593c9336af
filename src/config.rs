//! Run configuration
//!
//! A [`Config`] is built once at startup from defaults, an optional TOML
//! file and command-line values, then passed by reference to every
//! component. Nothing mutates it afterwards.

use crate::error::{Error, Result};
use crate::types::RepoId;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default template for the ref closing the mainline window
pub const DEFAULT_CURRENT_VERSION_TEMPLATE: &str = "v{major}.{minor}.0";
/// Default template for the ref opening both windows
pub const DEFAULT_PREVIOUS_VERSION_TEMPLATE: &str = "v{major}.{minor}.0";
/// Default template for the release branch name
pub const DEFAULT_RELEASE_BRANCH_TEMPLATE: &str = "v{major}.{minor}";
/// Default mainline branch
pub const DEFAULT_BASE_BRANCH: &str = "master";

/// Directory name under the platform config dir
const CONFIG_DIR: &str = "jaelon";

/// Filename for the optional config file
const CONFIG_FILE: &str = "config.toml";

/// Ref name templates, rendered with `{major}` and `{minor}` placeholders
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefTemplates {
    /// Ref for the end of the mainline window (non-current mode)
    pub current_version: String,
    /// Ref for the start of every window, rendered with `minor - 1`
    pub previous_version: String,
    /// Release branch name
    pub release_branch: String,
}

impl Default for RefTemplates {
    fn default() -> Self {
        Self {
            current_version: DEFAULT_CURRENT_VERSION_TEMPLATE.to_string(),
            previous_version: DEFAULT_PREVIOUS_VERSION_TEMPLATE.to_string(),
            release_branch: DEFAULT_RELEASE_BRANCH_TEMPLATE.to_string(),
        }
    }
}

/// Render a ref template for a version pair
pub fn render_template(template: &str, major: u64, minor: u64) -> String {
    template
        .replace("{major}", &major.to_string())
        .replace("{minor}", &minor.to_string())
}

/// Immutable configuration for one run
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    /// Target repository
    pub repo: RepoId,
    /// Major version of the milestone
    pub major: u64,
    /// Minor version of the milestone
    pub minor: u64,
    /// Follow the head of the base branch instead of a version ref
    pub current: bool,
    /// Mainline branch
    pub base_branch: String,
    /// Ref name templates
    pub templates: RefTemplates,
    /// Report only, never assign milestones
    pub dry_run: bool,
    /// Verbose diagnostics
    pub debug: bool,
}

impl Config {
    /// Version string used to match milestone titles
    pub fn version(&self) -> String {
        format!("{}.{}", self.major, self.minor)
    }
}

/// Values read from a TOML config file
///
/// Every field is optional; unset fields fall through to defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repo_name: Option<String>,
    /// Mainline branch
    pub base_branch: Option<String>,
    /// Current version template
    pub current_version_template: Option<String>,
    /// Previous version template
    pub previous_version_template: Option<String>,
    /// Release branch template
    pub release_branch_template: Option<String>,
    /// GitHub Enterprise host
    pub host: Option<String>,
}

/// Default config file location (`<config_dir>/jaelon/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load a config file.
///
/// Returns an empty `FileConfig` if the file doesn't exist.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;

    toml::from_str(&content)
        .map_err(|e| Error::Config(format!("failed to parse {}: {e}", path.display())))
}

/// Values supplied on the command line
///
/// `None` means "not given"; the file config or the defaults apply.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Repository owner
    pub owner: Option<String>,
    /// Repository name
    pub repo_name: Option<String>,
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Follow the head of the base branch
    pub current: bool,
    /// Mainline branch
    pub base_branch: Option<String>,
    /// Current version template
    pub current_version_template: Option<String>,
    /// Previous version template
    pub previous_version_template: Option<String>,
    /// Release branch template
    pub release_branch_template: Option<String>,
    /// Dry-run mode
    pub dry_run: bool,
    /// Debug mode
    pub debug: bool,
}

impl Config {
    /// Merge command-line values over file values over defaults.
    ///
    /// Fails when owner or repository name is missing, or when `minor`
    /// is zero (no previous minor version to start the window from).
    pub fn resolve(overrides: ConfigOverrides, file: FileConfig) -> Result<Self> {
        let owner = required(overrides.owner.or(file.owner), "owner")?;
        let name = required(overrides.repo_name.or(file.repo_name), "repo-name")?;

        if overrides.minor == 0 {
            return Err(Error::Config(
                "minor must be at least 1 to derive the previous version".to_string(),
            ));
        }

        let defaults = RefTemplates::default();
        let templates = RefTemplates {
            current_version: overrides
                .current_version_template
                .or(file.current_version_template)
                .unwrap_or(defaults.current_version),
            previous_version: overrides
                .previous_version_template
                .or(file.previous_version_template)
                .unwrap_or(defaults.previous_version),
            release_branch: overrides
                .release_branch_template
                .or(file.release_branch_template)
                .unwrap_or(defaults.release_branch),
        };

        Ok(Self {
            repo: RepoId::new(owner, name),
            major: overrides.major,
            minor: overrides.minor,
            current: overrides.current,
            base_branch: overrides
                .base_branch
                .or(file.base_branch)
                .unwrap_or_else(|| DEFAULT_BASE_BRANCH.to_string()),
            templates,
            dry_run: overrides.dry_run,
            debug: overrides.debug,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{field} is mandatory"))),
    }
}
