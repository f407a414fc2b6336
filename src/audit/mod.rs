mod path;
mod probe;
mod rules;
mod runner;
mod verdict;

pub use path::{
    BackendCategory, Classification, ComponentKind, ContextKind, DataFileKind, FileDomain,
    FrontendCategory, HookKind, MiddlewareKind, RouterKind, classify, normalize_path,
};
pub use probe::{ContentFeatures, probe};
pub use rules::{
    BACKEND_RULES, Decision, FRONTEND_RULES, MatchStatus, Outcome, Rule, RuleTable, RuleTrace,
    UNKNOWN_DOMAIN_RULE, decide, trace,
};
pub use runner::{AuditReport, ReportRow, audit_entries};
pub use verdict::{ComplianceStatus, Verdict};

use serde::Serialize;

use crate::source::{Content, ContentSource};

pub const NOT_FOUND_RULE: &str = "file-not-found";
pub const UNREADABLE_RULE: &str = "unreadable-file";

/// Everything learned about one file on the way to its verdict.
#[derive(Debug, Clone, Serialize)]
pub struct Assessment {
    pub path: String,
    pub classification: Classification,
    /// `None` when content was unavailable or never consulted.
    pub features: Option<ContentFeatures>,
    pub rule: &'static str,
    pub verdict: Verdict,
}

/// Assess a normalized path against already-acquired content.
///
/// Unavailable content always yields `NotFound`, whatever the path.
#[must_use]
pub fn assess_content(path: &str, content: &Content) -> Assessment {
    let classification = classify(path);

    let text = match content {
        Content::Text(text) => text,
        Content::Missing => {
            return Assessment {
                path: path.to_string(),
                classification,
                features: None,
                rule: NOT_FOUND_RULE,
                verdict: Verdict::file_not_found(),
            };
        }
        Content::Unreadable(_) => {
            return Assessment {
                path: path.to_string(),
                classification,
                features: None,
                rule: UNREADABLE_RULE,
                verdict: Verdict::unreadable(),
            };
        }
    };

    let features = classification
        .consults_content()
        .then(|| probe(text));
    let decision = decide(classification, &features.unwrap_or_default());

    Assessment {
        path: path.to_string(),
        classification,
        features,
        rule: decision.rule,
        verdict: decision.verdict,
    }
}

/// Acquire content for a normalized path and assess it.
#[must_use]
pub fn assess(path: &str, source: &dyn ContentSource) -> Assessment {
    assess_content(path, &source.acquire(path))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
