use std::fmt;

use serde::Serialize;

/// Compliance category assigned to a single file.
///
/// The variants are mutually exclusive. Their declaration order is the order used
/// in reports; it carries no severity meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceStatus {
    Compliant,
    NotNeeded,
    NeedsMigration,
    PartialReview,
    NotFound,
}

impl ComplianceStatus {
    pub const ALL: [Self; 5] = [
        Self::Compliant,
        Self::NotNeeded,
        Self::NeedsMigration,
        Self::PartialReview,
        Self::NotFound,
    ];

    /// Glyph written to the `Status` column of the CSV report.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Compliant => "✅",
            Self::NotNeeded => "➖",
            Self::NeedsMigration => "❌",
            Self::PartialReview => "🔄",
            Self::NotFound => "❓",
        }
    }

    /// Human-readable label used in summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Fully Compliant",
            Self::NotNeeded => "No RBAC Needed",
            Self::NeedsMigration => "Needs Migration",
            Self::PartialReview => "Partial/Review Needed",
            Self::NotFound => "Files Not Found",
        }
    }

    /// Whether this status counts toward the compliance rate denominator.
    #[must_use]
    pub const fn is_actionable(self) -> bool {
        matches!(
            self,
            Self::Compliant | Self::NeedsMigration | Self::PartialReview
        )
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Compliant => "COMPLIANT",
            Self::NotNeeded => "NOT NEEDED",
            Self::NeedsMigration => "NEEDS MIGRATION",
            Self::PartialReview => "REVIEW",
            Self::NotFound => "NOT FOUND",
        };
        f.write_str(name)
    }
}

/// Outcome of classifying one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub status: ComplianceStatus,
    pub note: String,
    /// Detected problem; empty when nothing needs fixing.
    pub issue: String,
    /// Remediation plan; empty when no action is required.
    pub plan: String,
}

impl Verdict {
    #[must_use]
    pub fn new(status: ComplianceStatus, note: &str) -> Self {
        Self {
            status,
            note: note.to_string(),
            issue: String::new(),
            plan: String::new(),
        }
    }

    #[must_use]
    pub fn with_issue(mut self, issue: &str) -> Self {
        self.issue = issue.to_string();
        self
    }

    #[must_use]
    pub fn with_plan(mut self, plan: &str) -> Self {
        self.plan = plan.to_string();
        self
    }

    #[must_use]
    pub fn file_not_found() -> Self {
        Self::new(ComplianceStatus::NotFound, "File not found")
    }

    #[must_use]
    pub fn unreadable() -> Self {
        Self::new(ComplianceStatus::NotFound, "Cannot read file")
    }

    #[must_use]
    pub fn unknown_file_type() -> Self {
        Self::new(ComplianceStatus::NotNeeded, "Unknown file type")
    }
}
