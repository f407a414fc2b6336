use std::fmt::Write;

use crate::audit::{AuditReport, ComplianceStatus, ReportRow};
use crate::error::Result;

use super::{ColorMode, ReportFormatter, ansi, is_no_color_set};

/// Console rendering of an audit report.
///
/// Always ends with the summary block. `verbose >= 1` lists files that need
/// migration or review first; `verbose >= 2` lists every file.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !is_no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_color(status: ComplianceStatus) -> &'static str {
        match status {
            ComplianceStatus::Compliant => ansi::GREEN,
            ComplianceStatus::NeedsMigration => ansi::RED,
            ComplianceStatus::PartialReview => ansi::YELLOW,
            ComplianceStatus::NotNeeded => ansi::DIM,
            ComplianceStatus::NotFound => ansi::CYAN,
        }
    }

    fn colorize(&self, text: &str, status: ComplianceStatus) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{}{text}{}", Self::status_color(status), ansi::RESET)
    }

    fn is_listed(&self, status: ComplianceStatus) -> bool {
        match self.verbose {
            0 => false,
            1 => matches!(
                status,
                ComplianceStatus::NeedsMigration | ComplianceStatus::PartialReview
            ),
            _ => true,
        }
    }

    fn format_row(&self, row: &ReportRow, output: &mut String) {
        let verdict = &row.verdict;
        let label = self.colorize(&verdict.status.to_string(), verdict.status);
        let _ = writeln!(output, "{} {label}: {}", verdict.status.symbol(), row.path);
        let _ = writeln!(output, "   {}", verdict.note);
        if !verdict.issue.is_empty() {
            let _ = writeln!(output, "   Issue: {}", verdict.issue);
        }
        if !verdict.plan.is_empty() {
            let _ = writeln!(output, "   Plan: {}", verdict.plan);
        }
    }

    fn format_summary(&self, report: &AuditReport, output: &mut String) {
        let tally = &report.tally;
        let _ = writeln!(output, "RBAC Compliance Summary");
        let _ = writeln!(output, "{}", "=".repeat(50));
        for status in ComplianceStatus::ALL {
            let count = self.colorize(&tally.count(status).to_string(), status);
            let _ = writeln!(output, "{} {}: {count}", status.symbol(), status.label());
        }
        let _ = writeln!(output, "Total Files: {}", tally.total());
        if report.skipped > 0 {
            let _ = writeln!(output, "Skipped Manifest Lines: {}", report.skipped);
        }

        if let Some(rate) = tally.compliance_rate() {
            let _ = writeln!(output, "RBAC Compliance Rate: {rate:.1}%");
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();

        let mut listed_any = false;
        for row in report.rows.iter().filter(|r| self.is_listed(r.verdict.status)) {
            self.format_row(row, &mut output);
            listed_any = true;
        }
        if listed_any {
            let _ = writeln!(output);
        }

        self.format_summary(report, &mut output);
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
