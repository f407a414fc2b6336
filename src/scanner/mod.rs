mod directory;
mod filter;

pub use directory::DirectoryScanner;
pub use filter::{DEFAULT_EXTENSIONS, FileFilter, GlobFilter};

use std::path::{Component, Path, PathBuf};

use indexmap::IndexSet;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the root does not exist or cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

/// Render a path the way manifests store it: forward slashes, no `.` segments.
#[must_use]
pub fn to_manifest_path(path: &Path) -> String {
    path.components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Turn scanned files into manifest paths relative to `base`.
///
/// Files outside `base` keep their path as scanned. The result is sorted and
/// free of duplicates, so overlapping scan roots list each file once.
#[must_use]
pub fn manifest_paths(base: &Path, files: &[PathBuf]) -> Vec<String> {
    let mut paths: IndexSet<String> = files
        .iter()
        .map(|file| to_manifest_path(file.strip_prefix(base).unwrap_or(file)))
        .filter(|path| !path.is_empty())
        .collect();
    paths.sort();
    paths.into_iter().collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
