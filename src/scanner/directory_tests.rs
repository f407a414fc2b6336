use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::scanner::{DEFAULT_EXTENSIONS, GlobFilter, manifest_paths};

fn js_filter(exclude: &[&str]) -> GlobFilter {
    let extensions = DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect();
    let exclude: Vec<String> = exclude.iter().map(|s| (*s).to_string()).collect();
    GlobFilter::new(extensions, &exclude).unwrap()
}

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "backend/routes/hr.js");
    write(root, "backend/controllers/userController.js");
    write(root, "backend/node_modules/express/index.js");
    write(root, "react/src/App.tsx");
    write(root, "react/src/App.css");
    temp_dir
}

#[test]
fn scan_finds_source_files_recursively() {
    let temp_dir = sample_tree();
    let scanner = DirectoryScanner::new(js_filter(&[]));

    let files = scanner.scan(temp_dir.path()).unwrap();
    let paths = manifest_paths(temp_dir.path(), &files);

    assert_eq!(
        paths,
        vec![
            "backend/controllers/userController.js",
            "backend/node_modules/express/index.js",
            "backend/routes/hr.js",
            "react/src/App.tsx",
        ]
    );
}

#[test]
fn scan_applies_exclude_patterns() {
    let temp_dir = sample_tree();
    let scanner = DirectoryScanner::new(js_filter(&["**/node_modules/**"]));

    let files = scanner.scan(temp_dir.path()).unwrap();

    assert_eq!(files.len(), 3);
    assert!(files.iter().all(|f| !f.to_string_lossy().contains("node_modules")));
}

#[test]
fn scan_with_gitignore_skips_ignored_paths() {
    let temp_dir = sample_tree();
    fs::write(temp_dir.path().join(".gitignore"), "node_modules/\n").unwrap();
    let scanner = DirectoryScanner::with_gitignore(js_filter(&[]), true);

    let files = scanner.scan(temp_dir.path()).unwrap();
    let paths = manifest_paths(temp_dir.path(), &files);

    assert_eq!(
        paths,
        vec![
            "backend/controllers/userController.js",
            "backend/routes/hr.js",
            "react/src/App.tsx",
        ]
    );
}

#[test]
fn gitignore_disabled_keeps_ignored_paths() {
    let temp_dir = sample_tree();
    fs::write(temp_dir.path().join(".gitignore"), "node_modules/\n").unwrap();
    let scanner = DirectoryScanner::with_gitignore(js_filter(&[]), false);

    let files = scanner.scan(temp_dir.path()).unwrap();
    assert_eq!(files.len(), 4);
}

#[test]
fn scan_missing_root_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let scanner = DirectoryScanner::new(js_filter(&[]));

    let err = scanner.scan(&temp_dir.path().join("nope")).unwrap_err();
    assert!(matches!(err, RbacAuditError::FileAccess { .. }));
}
