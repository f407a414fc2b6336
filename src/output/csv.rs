use std::fmt::Write;

use crate::audit::{AuditReport, ReportRow};
use crate::error::Result;

use super::ReportFormatter;

pub const CSV_HEADER: &str = "File Path,Status,Notes,RBAC_Issues,Implementation_Plan";

/// Quote a CSV field. Every field is quoted; embedded quotes are doubled.
#[must_use]
pub fn escape_csv(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Detailed per-file report, one row per manifest entry.
pub struct CsvFormatter;

impl CsvFormatter {
    fn format_row(row: &ReportRow, output: &mut String) {
        let verdict = &row.verdict;
        let fields = [
            row.path.as_str(),
            verdict.status.symbol(),
            verdict.note.as_str(),
            verdict.issue.as_str(),
            verdict.plan.as_str(),
        ];
        let line = fields
            .iter()
            .map(|field| escape_csv(field))
            .collect::<Vec<_>>()
            .join(",");
        let _ = writeln!(output, "{line}");
    }
}

impl ReportFormatter for CsvFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let mut output = String::new();
        let _ = writeln!(output, "{CSV_HEADER}");
        for row in &report.rows {
            Self::format_row(row, &mut output);
        }
        Ok(output)
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
