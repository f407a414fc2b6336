use std::path::{Path, PathBuf};

use crate::error::{RbacAuditError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{CONFIG_VERSION, Config};

/// Config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".rbac-audit.toml";

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(RbacAuditError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Loads configuration from the filesystem.
///
/// Looks for `.rbac-audit.toml` in the current directory and falls back to
/// `Config::default()` when there is none.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(CONFIG_FILE_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => Ok(Config::default()),
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        let content =
            self.fs
                .read_to_string(path)
                .map_err(|source| RbacAuditError::FileAccess {
                    path: path.to_path_buf(),
                    source,
                })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests/mod.rs"]
mod tests;
