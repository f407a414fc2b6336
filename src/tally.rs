use serde::Serialize;

use crate::audit::{ComplianceStatus, Verdict};

/// Running per-status counts over a sequence of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComplianceTally {
    pub compliant: usize,
    pub not_needed: usize,
    pub needs_migration: usize,
    pub partial_review: usize,
    pub not_found: usize,
}

impl ComplianceTally {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: &Verdict) {
        self.record_status(verdict.status);
    }

    pub const fn record_status(&mut self, status: ComplianceStatus) {
        match status {
            ComplianceStatus::Compliant => self.compliant += 1,
            ComplianceStatus::NotNeeded => self.not_needed += 1,
            ComplianceStatus::NeedsMigration => self.needs_migration += 1,
            ComplianceStatus::PartialReview => self.partial_review += 1,
            ComplianceStatus::NotFound => self.not_found += 1,
        }
    }

    /// Add another tally's counts into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.compliant += other.compliant;
        self.not_needed += other.not_needed;
        self.needs_migration += other.needs_migration;
        self.partial_review += other.partial_review;
        self.not_found += other.not_found;
    }

    #[must_use]
    pub const fn count(&self, status: ComplianceStatus) -> usize {
        match status {
            ComplianceStatus::Compliant => self.compliant,
            ComplianceStatus::NotNeeded => self.not_needed,
            ComplianceStatus::NeedsMigration => self.needs_migration,
            ComplianceStatus::PartialReview => self.partial_review,
            ComplianceStatus::NotFound => self.not_found,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.compliant + self.not_needed + self.needs_migration + self.partial_review + self.not_found
    }

    /// Files graded by the policy: compliant, needing migration, or needing review.
    #[must_use]
    pub const fn actionable(&self) -> usize {
        self.compliant + self.needs_migration + self.partial_review
    }

    /// Percentage of actionable files that are compliant, or `None` with no actionable files.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn compliance_rate(&self) -> Option<f64> {
        let actionable = self.actionable();
        if actionable == 0 {
            return None;
        }
        Some(self.compliant as f64 / actionable as f64 * 100.0)
    }
}

impl<'a> FromIterator<&'a Verdict> for ComplianceTally {
    fn from_iter<I: IntoIterator<Item = &'a Verdict>>(iter: I) -> Self {
        let mut tally = Self::new();
        for verdict in iter {
            tally.record(verdict);
        }
        tally
    }
}

#[cfg(test)]
#[path = "tally_tests.rs"]
mod tests;
