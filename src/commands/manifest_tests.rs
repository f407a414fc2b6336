use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;
use crate::manifest::parse_manifest;

fn parse(argv: &[&str]) -> Cli {
    let mut full = vec!["rbac-audit", "manifest"];
    full.extend_from_slice(argv);
    Cli::parse_from(full)
}

fn manifest_args(cli: &Cli) -> &ManifestArgs {
    match &cli.command {
        Commands::Manifest(args) => args,
        _ => panic!("Expected Manifest command"),
    }
}

fn write(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn sample_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write(root, "backend/routes/hr.js");
    write(root, "backend/node_modules/lib/index.js");
    write(root, "react/src/App.tsx");
    write(root, "react/src/App.css");
    write(root, "docs/guide.js");
    temp_dir
}

#[test]
fn default_roots_come_from_config() {
    let temp_dir = sample_project();
    let base = temp_dir.path().to_str().unwrap();
    let output = temp_dir.path().join("files.txt");
    let cli = parse(&[
        "--base",
        base,
        "-o",
        output.to_str().unwrap(),
        "--no-config",
        "-q",
    ]);

    let count = run_manifest_impl(manifest_args(&cli), &cli).unwrap();
    assert_eq!(count, 2);

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text, "1→backend/routes/hr.js\n2→react/src/App.tsx\n");

    let reparsed = parse_manifest(&text, true);
    assert_eq!(reparsed.entries.len(), 2);
    assert!(reparsed.malformed.is_empty());
}

#[test]
fn explicit_paths_and_extensions() {
    let temp_dir = sample_project();
    let base = temp_dir.path();
    let docs = base.join("docs");
    let output = base.join("files.txt");
    let cli = parse(&[
        docs.to_str().unwrap(),
        "--base",
        base.to_str().unwrap(),
        "--ext",
        "js",
        "-o",
        output.to_str().unwrap(),
        "--no-config",
        "-q",
    ]);

    run_manifest_impl(manifest_args(&cli), &cli).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), "1→docs/guide.js\n");
}

#[test]
fn no_gitignore_keeps_default_excludes() {
    let temp_dir = sample_project();
    fs::write(temp_dir.path().join("react/.gitignore"), "src/\n").unwrap();
    let base = temp_dir.path().to_str().unwrap();
    let output = temp_dir.path().join("files.txt");

    let cli = parse(&["--base", base, "-o", output.to_str().unwrap(), "--no-config", "-q"]);
    run_manifest_impl(manifest_args(&cli), &cli).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(!text.contains("react/src/App.tsx"));

    let cli = parse(&[
        "--base",
        base,
        "--no-gitignore",
        "-o",
        output.to_str().unwrap(),
        "--no-config",
        "-q",
    ]);
    run_manifest_impl(manifest_args(&cli), &cli).unwrap();
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("react/src/App.tsx"));
    assert!(!text.contains("node_modules"));
}

#[test]
fn missing_explicit_path_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("nope");
    let cli = parse(&[missing.to_str().unwrap(), "--no-config", "-q"]);

    assert!(run_manifest_impl(manifest_args(&cli), &cli).is_err());
    assert_eq!(run_manifest(manifest_args(&cli), &cli), EXIT_CONFIG_ERROR);
}

#[test]
fn invalid_exclude_pattern_is_an_error() {
    let temp_dir = sample_project();
    let cli = parse(&[
        "--base",
        temp_dir.path().to_str().unwrap(),
        "-x",
        "[invalid",
        "--no-config",
        "-q",
    ]);

    let err = run_manifest_impl(manifest_args(&cli), &cli).unwrap_err();
    assert!(matches!(err, crate::RbacAuditError::InvalidPattern { .. }));
}
