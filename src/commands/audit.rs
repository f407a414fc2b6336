use std::path::{Path, PathBuf};

use crate::audit::{AuditReport, audit_entries};
use crate::cli::{AuditArgs, Cli};
use crate::config::Config;
use crate::error::Result;
use crate::manifest::{Manifest, load_manifest};
use crate::output::{
    AuditProgress, CsvFormatter, JsonFormatter, OutputFormat, ReportFormatter, SummaryFormatter,
    TextFormatter, print_info, print_warning_full,
};
use crate::source::FsContentSource;
use crate::{EXIT_CONFIG_ERROR, EXIT_MIGRATION_NEEDED, EXIT_SUCCESS};

use super::context::{load_config, report_error, write_file, write_output};

/// Effective audit settings after merging CLI flags over config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditOptions {
    pub manifest: PathBuf,
    pub root: PathBuf,
    pub strict: bool,
    pub csv: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

impl AuditOptions {
    /// CLI flags win over config values. The root falls back to the manifest's directory.
    ///
    /// `--no-reports` disables both report files.
    #[must_use]
    pub fn resolve(args: &AuditArgs, config: &Config) -> Self {
        let manifest = args
            .manifest
            .clone()
            .unwrap_or_else(|| config.manifest.path.clone());
        let root = args
            .root
            .clone()
            .or_else(|| config.manifest.root.clone())
            .unwrap_or_else(|| manifest_dir(&manifest));

        let report_path = |flag: Option<&PathBuf>, configured: Option<&PathBuf>| {
            if args.no_reports {
                None
            } else {
                flag.or(configured).cloned()
            }
        };

        Self {
            root,
            strict: config.manifest.strict_line_numbers && !args.lenient_manifest,
            csv: report_path(args.csv.as_ref(), config.output.csv.as_ref()),
            summary: report_path(args.summary.as_ref(), config.output.summary.as_ref()),
            manifest,
        }
    }
}

fn manifest_dir(manifest: &Path) -> PathBuf {
    match manifest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[must_use]
pub fn run_audit(args: &AuditArgs, cli: &Cli) -> i32 {
    match run_audit_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Audit every manifest entry and write the requested reports.
///
/// # Errors
/// Returns an error if the config or manifest cannot be loaded, or a report cannot be written.
pub fn run_audit_impl(args: &AuditArgs, cli: &Cli) -> Result<i32> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let options = AuditOptions::resolve(args, &config);

    let manifest = load_manifest(&options.manifest, options.strict)?;
    if !cli.quiet {
        warn_malformed(&manifest);
    }

    let source = FsContentSource::new(&options.root);
    let progress = AuditProgress::new(manifest.entries.len() as u64, cli.quiet);
    let report = audit_entries(&manifest.entries, &source, || progress.inc())
        .with_skipped(manifest.malformed.len());
    progress.finish();

    write_reports(&report, &options, cli.quiet)?;

    let rendered = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.color.into(), cli.verbose).format(&report)?
        }
        OutputFormat::Json => JsonFormatter.format(&report)?,
        OutputFormat::Csv => CsvFormatter.format(&report)?,
    };
    write_output(args.output.as_deref(), &rendered, cli.quiet)?;

    if args.fail_on_migration && report.tally.needs_migration > 0 {
        return Ok(EXIT_MIGRATION_NEEDED);
    }
    Ok(EXIT_SUCCESS)
}

fn warn_malformed(manifest: &Manifest) {
    if manifest.malformed.is_empty() {
        return;
    }

    let lines = manifest
        .malformed
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    print_warning_full(
        &format!(
            "Skipped {} malformed manifest line(s)",
            manifest.malformed.len()
        ),
        Some(&format!("line(s) {lines}")),
        Some("Prefix each path with its line number (`12→backend/routes/hr.js`) or pass --lenient-manifest"),
    );
}

fn write_reports(report: &AuditReport, options: &AuditOptions, quiet: bool) -> Result<()> {
    if let Some(csv_path) = &options.csv {
        write_file(csv_path, &CsvFormatter.format(report)?)?;
        if !quiet {
            print_info(&format!("CSV Report: {}", csv_path.display()));
        }
    }

    if let Some(summary_path) = &options.summary {
        let formatter = match &options.csv {
            Some(csv_path) => SummaryFormatter::new().with_detailed_report(csv_path),
            None => SummaryFormatter::new(),
        };
        write_file(summary_path, &formatter.format(report)?)?;
        if !quiet {
            print_info(&format!("Summary: {}", summary_path.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "audit_tests.rs"]
mod tests;
