use std::fs;
use std::path::Path;

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{RbacAuditError, Result};
use crate::output::print_error_full;

/// Load configuration from `config_path`, or from the current directory.
///
/// # Errors
/// Returns an error if the configuration file cannot be read or parsed.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Print a fatal error block with its detail and hint.
pub(crate) fn report_error(err: &RbacAuditError) {
    print_error_full(
        err.error_type(),
        &err.message(),
        err.detail().as_deref(),
        err.suggestion(),
    );
}

/// Write a file, creating parent directories if needed.
pub(crate) fn write_file(path: &Path, content: &str) -> Result<()> {
    let to_access_error = |source| RbacAuditError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_access_error)?;
    }
    fs::write(path, content).map_err(to_access_error)
}

/// Write output to a file or stdout.
///
/// `quiet` only suppresses stdout; file writes always happen.
pub(crate) fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    if let Some(path) = output_path {
        write_file(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
