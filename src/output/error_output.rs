//! Colored error, warning and info blocks on stderr.
//!
//! Format: `✖ Error Type: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi, is_no_color_set};

/// Headline of a diagnostic block.
enum Headline<'a> {
    Error(&'a str),
    Warning,
    Info,
}

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    /// Creates an error output formatter that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(ColorMode::Auto)
    }

    fn stderr_supports_color() -> bool {
        !is_no_color_set() && std::io::stderr().is_terminal()
    }

    /// Writes `✖ {error_type}: {message}` plus optional detail and suggestion lines.
    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, &Headline::Error(error_type), message, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        self.write_block(w, &Headline::Warning, message, detail, suggestion);
    }

    pub fn write_info<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        self.write_block(w, &Headline::Info, message, detail, None);
    }

    // Write failures are discarded: there is nowhere left to report them.
    fn write_block<W: Write>(
        &self,
        w: &mut W,
        headline: &Headline<'_>,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let (head, color) = match headline {
            Headline::Error(kind) => (format!("✖ {kind}:"), ansi::RED),
            Headline::Warning => ("⚠ Warning:".to_string(), ansi::YELLOW),
            Headline::Info => ("ℹ".to_string(), ansi::CYAN),
        };

        if self.use_colors {
            let _ = writeln!(w, "{}{color}{head}{} {message}", ansi::BOLD, ansi::RESET);
        } else {
            let _ = writeln!(w, "{head} {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                let _ = writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET);
            } else {
                let _ = writeln!(w, "  help: {s}");
            }
        }
    }

    /// Creates an error output formatter with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

/// Prints an error with detail and suggestion to stderr.
pub fn print_error_full(
    error_type: &str,
    message: &str,
    detail: Option<&str>,
    suggestion: Option<&str>,
) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_error(&mut stderr, error_type, message, detail, suggestion);
}

pub fn print_warning(message: &str) {
    print_warning_full(message, None, None);
}

pub fn print_warning_full(message: &str, detail: Option<&str>, suggestion: Option<&str>) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_warning(&mut stderr, message, detail, suggestion);
}

/// Prints an informational line to stderr.
pub fn print_info(message: &str) {
    let mut stderr = std::io::stderr().lock();
    ErrorOutput::stderr().write_info(&mut stderr, message, None);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
