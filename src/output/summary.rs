use std::fmt::Write;
use std::path::PathBuf;

use crate::audit::{AuditReport, ComplianceStatus};
use crate::error::Result;

use super::ReportFormatter;

const RULE_WIDTH: usize = 50;

/// Narrative summary written next to the detailed report.
#[derive(Debug, Default)]
pub struct SummaryFormatter {
    detailed_report: Option<PathBuf>,
}

impl SummaryFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            detailed_report: None,
        }
    }

    /// Reference the CSV report at the end of the summary.
    #[must_use]
    pub fn with_detailed_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.detailed_report = Some(path.into());
        self
    }
}

impl ReportFormatter for SummaryFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let tally = &report.tally;
        let mut output = String::new();

        let _ = writeln!(output, "RBAC Compliance Analysis Summary");
        let _ = writeln!(output, "{}", "=".repeat(RULE_WIDTH));
        let _ = writeln!(output);
        let _ = writeln!(output, "Total Files Analyzed: {}", tally.total());
        if report.skipped > 0 {
            let _ = writeln!(output, "Skipped Manifest Lines: {}", report.skipped);
        }
        let _ = writeln!(output);

        for status in ComplianceStatus::ALL {
            let _ = writeln!(
                output,
                "{} {}: {}",
                status.symbol(),
                status.label(),
                tally.count(status)
            );
        }

        if let Some(rate) = tally.compliance_rate() {
            let _ = writeln!(output);
            let _ = writeln!(output, "RBAC Compliance Rate: {rate:.1}%");
        }

        if let Some(path) = &self.detailed_report {
            let _ = writeln!(output);
            let _ = writeln!(output, "Detailed Report: {}", path.display());
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
