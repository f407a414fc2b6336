use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::{ColorMode, OutputFormat};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

/// Output format for the explain command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExplainFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "rbac-audit")]
#[command(author, version, about = "Classify source files by RBAC compliance")]
#[command(long_about = "Reads a manifest of backend and frontend source files and \
    classifies each one by how it enforces role-based access control.\n\n\
    Exit codes:\n  \
    0 - Audit completed\n  \
    1 - Files need migration (with --fail-on-migration)\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every file listed in a manifest
    Audit(AuditArgs),

    /// Generate a numbered manifest by walking source directories
    Manifest(ManifestArgs),

    /// Show how a single file is classified and which rule decides it
    Explain(ExplainArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct AuditArgs {
    /// Manifest file listing one path per line (default: from config, then files.txt)
    pub manifest: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory manifest paths are resolved against (default: the manifest's directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Write the detailed CSV report to this file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write the narrative summary to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// Output format for stdout [possible values: text, json, csv]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Accept manifest lines without a `N→` line-number prefix
    #[arg(long)]
    pub lenient_manifest: bool,

    /// Do not write the CSV and summary report files
    #[arg(long, conflicts_with_all = ["csv", "summary"])]
    pub no_reports: bool,

    /// Exit with code 1 when any file needs migration
    #[arg(long)]
    pub fail_on_migration: bool,
}

#[derive(Parser, Debug)]
pub struct ManifestArgs {
    /// Directories to scan (default: [scan] roots from config)
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the listed paths are made relative to
    #[arg(long, default_value = ".")]
    pub base: PathBuf,

    /// File extensions to list (comma-separated, e.g., js,tsx)
    #[arg(long, value_delimiter = ',')]
    pub ext: Option<Vec<String>>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Do not apply .gitignore rules
    #[arg(long)]
    pub no_gitignore: bool,

    /// Write the manifest to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// File path as it would appear in a manifest
    pub path: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the path is resolved against (default: current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ExplainFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".rbac-audit.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
