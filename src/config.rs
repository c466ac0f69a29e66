use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SiteError;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub build: BuildConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Markdown source tree.
    pub content_dir: PathBuf,
    /// Copied verbatim into the output directory.
    pub static_dir: PathBuf,
    pub template: PathBuf,
    pub output_dir: PathBuf,
    /// Substituted for the leading `/` of root-relative `href` and `src` values.
    pub base_path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("docs"),
            base_path: "/".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BuildConfig {
    pub on_error: ErrorPolicy,
}

/// What to do with a page that fails to render.
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the build at the first failure.
    #[default]
    Abort,
    /// Log the failure and continue with the remaining pages.
    Skip,
}

impl Config {
    /// The configuration bundled with the binary.
    pub fn compiled_default() -> Self {
        // Checked by build.rs, so only a schema mismatch can land here.
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Load config from a TOML file, or return the compiled defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SiteError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content).map_err(|source| SiteError::Config {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::compiled_default())
            }
            Err(e) => Err(SiteError::io(path, e)),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
