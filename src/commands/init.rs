use crate::cli::InitArgs;
use crate::config::{CONFIG_VERSION, DEFAULT_CSV_PATH, DEFAULT_SUMMARY_PATH};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, RbacAuditError, Result};

use super::context::{report_error, write_file};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Write a starter configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(RbacAuditError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    write_file(output_path, &generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    format!(
        r#"# rbac-audit configuration file
version = "{CONFIG_VERSION}"

[manifest]
# Manifest listing one path per line, optionally as "12→path"
path = "files.txt"

# Skip lines without the "N→" prefix. Set to false to accept bare paths.
strict_line_numbers = true

# Directory manifest paths resolve against (default: the manifest's directory)
# root = "."

[output]
# Report files written by `rbac-audit audit` (skip both with --no-reports)
csv = "{DEFAULT_CSV_PATH}"
summary = "{DEFAULT_SUMMARY_PATH}"

[scan]
# Directories walked by `rbac-audit manifest`
roots = ["backend", "react"]

# Source file extensions to include
extensions = ["js", "jsx", "ts", "tsx", "mjs", "cjs"]

# Respect .gitignore files under each root
gitignore = true

# Exclude patterns (glob syntax)
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]
"#
    )
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
