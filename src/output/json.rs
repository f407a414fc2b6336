use serde::Serialize;

use crate::audit::{AuditReport, ComplianceStatus, ReportRow};
use crate::error::Result;
use crate::tally::ComplianceTally;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    files: Vec<FileResult<'a>>,
}

#[derive(Serialize)]
struct Summary {
    #[serde(flatten)]
    counts: ComplianceTally,
    total: usize,
    /// Malformed manifest lines, not part of `total`.
    skipped: usize,
    compliance_rate: Option<f64>,
}

#[derive(Serialize)]
struct FileResult<'a> {
    line: usize,
    path: &'a str,
    status: ComplianceStatus,
    symbol: &'static str,
    rule: &'static str,
    note: &'a str,
    issue: &'a str,
    plan: &'a str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &AuditReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                counts: report.tally,
                total: report.tally.total(),
                skipped: report.skipped,
                compliance_rate: report.tally.compliance_rate(),
            },
            files: report.rows.iter().map(convert_row).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_row(row: &ReportRow) -> FileResult<'_> {
    let verdict = &row.verdict;
    FileResult {
        line: row.index,
        path: &row.path,
        status: verdict.status,
        symbol: verdict.status.symbol(),
        rule: row.rule,
        note: &verdict.note,
        issue: &verdict.issue,
        plan: &verdict.plan,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
