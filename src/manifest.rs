//! Manifest parsing and formatting.
//!
//! A manifest lists one relative path per line, prefixed with a line number and an
//! arrow (`12→backend/routes/hr.js`). Lines without the prefix are malformed unless
//! parsing is lenient, in which case the whole line is the path.

use std::fmt::Write;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::audit::normalize_path;
use crate::error::{RbacAuditError, Result};

static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+→(.*)$").expect("Invalid regex"));

/// One usable manifest line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// 1-based line number in the manifest.
    pub index: usize,
    /// Trimmed, forward-slash relative path.
    pub path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine {
    Entry(ManifestEntry),
    Blank,
    /// Failed the structural check; produces no verdict.
    Malformed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    pub entries: Vec<ManifestEntry>,
    /// Line numbers of malformed lines.
    pub malformed: Vec<usize>,
    pub line_count: usize,
}

/// Parse one manifest line.
///
/// With `strict`, a line must carry a `N→` prefix; otherwise the prefix is optional.
#[must_use]
pub fn parse_line(index: usize, raw: &str, strict: bool) -> ParsedLine {
    let body = match NUMBERED_LINE.captures(raw) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None if raw.trim().is_empty() => return ParsedLine::Blank,
        None if strict => return ParsedLine::Malformed,
        None => raw,
    };

    let path = normalize_path(body);
    if path.is_empty() {
        // A numbered line with nothing after the arrow.
        return if strict {
            ParsedLine::Malformed
        } else {
            ParsedLine::Blank
        };
    }

    ParsedLine::Entry(ManifestEntry { index, path })
}

#[must_use]
pub fn parse_manifest(text: &str, strict: bool) -> Manifest {
    let mut manifest = Manifest::default();

    for (i, raw) in text.lines().enumerate() {
        let index = i + 1;
        manifest.line_count = index;
        match parse_line(index, raw, strict) {
            ParsedLine::Entry(entry) => manifest.entries.push(entry),
            ParsedLine::Malformed => manifest.malformed.push(index),
            ParsedLine::Blank => {}
        }
    }

    manifest
}

/// Read and parse a manifest file.
///
/// # Errors
/// Returns `ManifestNotFound` if the file does not exist, or `FileAccess` if it cannot be read.
pub fn load_manifest(path: &Path, strict: bool) -> Result<Manifest> {
    if !path.is_file() {
        return Err(RbacAuditError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = fs::read(path).map_err(|source| RbacAuditError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_manifest(&String::from_utf8_lossy(&bytes), strict))
}

/// Render paths as a numbered manifest, one `N→path` line each.
#[must_use]
pub fn format_manifest<S: AsRef<str>>(paths: &[S]) -> String {
    let mut output = String::new();
    for (i, path) in paths.iter().enumerate() {
        let _ = writeln!(output, "{}→{}", i + 1, path.as_ref());
    }
    output
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
