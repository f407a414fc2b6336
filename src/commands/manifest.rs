use std::path::PathBuf;

use crate::cli::{Cli, ManifestArgs};
use crate::error::Result;
use crate::manifest::format_manifest;
use crate::output::{print_info, print_warning};
use crate::scanner::{DirectoryScanner, FileScanner, GlobFilter, manifest_paths};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, report_error, write_output};

#[must_use]
pub fn run_manifest(args: &ManifestArgs, cli: &Cli) -> i32 {
    match run_manifest_impl(args, cli) {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Walk the scan roots and write a numbered manifest. Returns the number of listed paths.
///
/// Explicit paths must exist; configured roots that are missing are skipped with a warning.
///
/// # Errors
/// Returns an error if the config cannot be loaded, a pattern is invalid, an explicit
/// path does not exist, or the manifest cannot be written.
pub fn run_manifest_impl(args: &ManifestArgs, cli: &Cli) -> Result<usize> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;

    let explicit = !args.paths.is_empty();
    let roots: Vec<PathBuf> = if explicit {
        args.paths.clone()
    } else {
        config.scan.roots.iter().map(|r| args.base.join(r)).collect()
    };

    let extensions = args
        .ext
        .clone()
        .unwrap_or_else(|| config.scan.extensions.clone());
    let mut exclude = config.scan.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());

    let filter = GlobFilter::new(extensions, &exclude)?;
    let use_gitignore = config.scan.gitignore && !args.no_gitignore;
    let scanner = DirectoryScanner::with_gitignore(filter, use_gitignore);

    let mut files = Vec::new();
    for root in &roots {
        if !explicit && !root.exists() {
            if !cli.quiet {
                print_warning(&format!("Scan root not found, skipping: {}", root.display()));
            }
            continue;
        }
        files.extend(scanner.scan(root)?);
    }

    let paths = manifest_paths(&args.base, &files);
    write_output(args.output.as_deref(), &format_manifest(&paths), cli.quiet)?;

    if let Some(output) = &args.output
        && !cli.quiet
    {
        print_info(&format!(
            "Wrote {} paths to {}",
            paths.len(),
            output.display()
        ));
    }

    Ok(paths.len())
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;
