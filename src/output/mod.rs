mod csv;
mod error_output;
mod json;
mod progress;
mod summary;
mod text;

pub use csv::{CSV_HEADER, CsvFormatter, escape_csv};
pub use error_output::{
    ErrorOutput, print_error_full, print_info, print_warning, print_warning_full,
};
pub use json::JsonFormatter;
pub use progress::AuditProgress;
pub use summary::SummaryFormatter;
pub use text::TextFormatter;

use crate::audit::AuditReport;
use crate::error::Result;

/// Trait for rendering an audit report into an output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &AuditReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

/// Checks if `NO_COLOR` is set. Presence of the variable (any value) disables color.
fn is_no_color_set() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
