use rayon::prelude::*;
use serde::Serialize;

use crate::manifest::ManifestEntry;
use crate::source::ContentSource;
use crate::tally::ComplianceTally;

use super::{Assessment, Verdict, assess};

/// One report line: a manifest path and its verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    /// Manifest line number.
    pub index: usize,
    pub path: String,
    pub rule: &'static str,
    pub verdict: Verdict,
}

impl From<(usize, Assessment)> for ReportRow {
    fn from((index, assessment): (usize, Assessment)) -> Self {
        Self {
            index,
            path: assessment.path,
            rule: assessment.rule,
            verdict: assessment.verdict,
        }
    }
}

/// Verdicts for a whole manifest, in manifest order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    pub rows: Vec<ReportRow>,
    pub tally: ComplianceTally,
    /// Malformed manifest lines that produced no verdict.
    pub skipped: usize,
}

impl AuditReport {
    #[must_use]
    pub const fn with_skipped(mut self, skipped: usize) -> Self {
        self.skipped = skipped;
        self
    }
}

/// Assess every entry in parallel, then restore manifest order and tally.
///
/// `on_file` runs once per finished entry, from worker threads.
pub fn audit_entries<F>(
    entries: &[ManifestEntry],
    source: &dyn ContentSource,
    on_file: F,
) -> AuditReport
where
    F: Fn() + Sync,
{
    let mut rows: Vec<ReportRow> = entries
        .par_iter()
        .map(|entry| {
            let assessment = assess(&entry.path, source);
            on_file();
            ReportRow::from((entry.index, assessment))
        })
        .collect();

    // Rows are reported in manifest line order.
    rows.sort_by_key(|row| row.index);

    let tally = rows
        .par_iter()
        .fold(ComplianceTally::new, |mut tally, row| {
            tally.record(&row.verdict);
            tally
        })
        .reduce(ComplianceTally::new, |mut left, right| {
            left.merge(&right);
            left
        });

    AuditReport {
        rows,
        tally,
        skipped: 0,
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
