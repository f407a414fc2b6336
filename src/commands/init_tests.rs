use std::fs;

use tempfile::TempDir;

use super::*;
use crate::config::Config;

fn args(dir: &TempDir, force: bool) -> InitArgs {
    InitArgs {
        output: dir.path().join(".rbac-audit.toml"),
        force,
    }
}

#[test]
fn template_is_valid_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();

    assert_eq!(config.version.as_deref(), Some(CONFIG_VERSION));
    assert_eq!(config.manifest.path.to_str(), Some("files.txt"));
    assert!(config.manifest.strict_line_numbers);
    assert!(config.manifest.root.is_none());
    assert_eq!(config.output, Config::default().output);
    assert!(config.scan.gitignore);
    assert!(config.scan.exclude.contains(&"**/node_modules/**".to_string()));
}

#[test]
fn template_matches_scan_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    let defaults = Config::default();

    assert_eq!(config.scan.roots, defaults.scan.roots);
    assert_eq!(config.scan.extensions, defaults.scan.extensions);
}

#[test]
fn template_mentions_report_files() {
    let template = generate_config_template();
    assert!(template.contains("csv = \"files_status_detailed.csv\""));
    assert!(template.contains("summary = \"rbac_summary.txt\""));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let args = args(&temp_dir, false);

    run_init_impl(&args).unwrap();

    let content = fs::read_to_string(&args.output).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn run_init_creates_parent_directories() {
    let temp_dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: temp_dir.path().join("nested/dir/.rbac-audit.toml"),
        force: false,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    assert!(args.output.exists());
}

#[test]
fn run_init_refuses_to_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let args = args(&temp_dir, false);
    fs::write(&args.output, "# mine").unwrap();

    let err = run_init_impl(&args).unwrap_err();
    assert!(matches!(err, RbacAuditError::Config(_)));
    assert!(err.to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&args.output).unwrap(), "# mine");

    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
}

#[test]
fn run_init_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let args = args(&temp_dir, true);
    fs::write(&args.output, "# mine").unwrap();

    run_init_impl(&args).unwrap();
    assert!(
        fs::read_to_string(&args.output)
            .unwrap()
            .starts_with("# rbac-audit configuration file")
    );
}
