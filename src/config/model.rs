use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::scanner::DEFAULT_EXTENSIONS;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_MANIFEST_PATH: &str = "files.txt";
pub const DEFAULT_CSV_PATH: &str = "files_status_detailed.csv";
pub const DEFAULT_SUMMARY_PATH: &str = "rbac_summary.txt";

/// Where the manifest lives and how strictly it is parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,

    /// Require the `N→` line-number prefix on every entry. Lines without it are skipped.
    #[serde(default = "default_true")]
    pub strict_line_numbers: bool,

    /// Directory manifest paths resolve against. Defaults to the manifest's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
            strict_line_numbers: true,
            root: None,
        }
    }
}

/// Report files written by `audit`, relative to the working directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_csv_path", skip_serializing_if = "Option::is_none")]
    pub csv: Option<PathBuf>,

    #[serde(default = "default_summary_path", skip_serializing_if = "Option::is_none")]
    pub summary: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv: default_csv_path(),
            summary: default_summary_path(),
        }
    }
}

/// Directory walk used by `manifest`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,

    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns dropped from the walk, on top of `.gitignore`.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,

    #[serde(default = "default_true")]
    pub gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            extensions: default_extensions(),
            exclude: default_exclude(),
            gitignore: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub scan: ScanConfig,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST_PATH)
}

#[allow(clippy::unnecessary_wraps)]
fn default_csv_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_CSV_PATH))
}

#[allow(clippy::unnecessary_wraps)]
fn default_summary_path() -> Option<PathBuf> {
    Some(PathBuf::from(DEFAULT_SUMMARY_PATH))
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("backend"), PathBuf::from("react")]
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|ext| (*ext).to_string()).collect()
}

fn default_exclude() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
