use std::collections::{HashMap, HashSet};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Result of trying to read a manifest entry's content.
#[derive(Debug)]
pub enum Content {
    Text(String),
    /// Nothing exists at the resolved path.
    Missing,
    /// Something exists but could not be read.
    Unreadable(io::Error),
}

/// Supplies file content for manifest paths.
///
/// Implementations must be shareable across rayon worker threads.
pub trait ContentSource: Sync {
    fn acquire(&self, relative_path: &str) -> Content;
}

/// Reads files from disk relative to a root directory.
#[derive(Debug, Clone)]
pub struct FsContentSource {
    root: PathBuf,
}

impl FsContentSource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ContentSource for FsContentSource {
    fn acquire(&self, relative_path: &str) -> Content {
        let path = self.root.join(relative_path);
        if !path.exists() {
            return Content::Missing;
        }

        // Invalid UTF-8 is replaced rather than rejected; probes are lexical.
        match fs::read(&path) {
            Ok(bytes) => Content::Text(String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => Content::Unreadable(e),
        }
    }
}

/// In-memory content, keyed by normalized relative path.
#[derive(Debug, Default, Clone)]
pub struct MemoryContentSource {
    files: HashMap<String, String>,
    unreadable: HashSet<String>,
}

impl MemoryContentSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    /// Registers a path that exists but fails to read.
    #[must_use]
    pub fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.insert(path.to_string());
        self
    }
}

impl ContentSource for MemoryContentSource {
    fn acquire(&self, relative_path: &str) -> Content {
        if self.unreadable.contains(relative_path) {
            return Content::Unreadable(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "permission denied",
            ));
        }
        self.files
            .get(relative_path)
            .map_or(Content::Missing, |text| Content::Text(text.clone()))
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
