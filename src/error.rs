use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RbacAuditError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Manifest not found: {}", path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("Failed to access file: {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl RbacAuditError {
    /// Short category name shown in the error header.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::ManifestNotFound { .. } => "Manifest",
            Self::FileAccess { .. } => "FileAccess",
            Self::InvalidPattern { .. } => "Pattern",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
        }
    }

    /// Main message without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg) => msg.clone(),
            Self::ManifestNotFound { path } | Self::FileAccess { path, .. } => {
                path.display().to_string()
            }
            Self::InvalidPattern { pattern, .. } => pattern.clone(),
            Self::Io(e) => e.to_string(),
            Self::TomlParse(e) => e.message().to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when there is one worth showing.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::ManifestNotFound { .. } => Some("the manifest lists one file path per line".into()),
            Self::Config(_) | Self::Io(_) | Self::TomlParse(_) | Self::JsonSerialize(_) => None,
        }
    }

    /// Actionable hint, when one exists.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ManifestNotFound { .. } => {
                Some("Generate one with `rbac-audit manifest -o files.txt`")
            }
            Self::TomlParse(_) => Some("Run `rbac-audit init --force` to regenerate a valid config"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RbacAuditError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
