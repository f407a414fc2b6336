use std::fmt::Write;
use std::path::PathBuf;

use serde::Serialize;

use crate::audit::{
    Classification, ContentFeatures, FileDomain, MatchStatus, RuleTrace, Verdict, assess_content,
    normalize_path, trace,
};
use crate::cli::{Cli, ExplainArgs, ExplainFormat};
use crate::error::Result;
use crate::source::{Content, ContentSource, FsContentSource};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

use super::context::{load_config, report_error};

/// What happened when the file's content was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentState {
    Read,
    Missing,
    Unreadable,
}

/// Everything that went into one file's verdict.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub path: String,
    pub domain: FileDomain,
    pub classification: Classification,
    pub content: ContentState,
    /// `None` when the category is decided from the path alone.
    pub features: Option<ContentFeatures>,
    /// Empty when content was unavailable or the domain is unknown.
    pub rule_chain: Vec<RuleTrace>,
    pub rule: &'static str,
    pub verdict: Verdict,
}

/// Classify a single path and record the full rule chain.
#[must_use]
pub fn explain_path(raw_path: &str, source: &dyn ContentSource) -> Explanation {
    let path = normalize_path(raw_path);
    let content = source.acquire(&path);
    let assessment = assess_content(&path, &content);

    let (state, rule_chain) = match content {
        Content::Text(_) => (
            ContentState::Read,
            trace(
                assessment.classification,
                &assessment.features.unwrap_or_default(),
            ),
        ),
        Content::Missing => (ContentState::Missing, Vec::new()),
        Content::Unreadable(_) => (ContentState::Unreadable, Vec::new()),
    };

    Explanation {
        domain: assessment.classification.domain(),
        classification: assessment.classification,
        content: state,
        features: assessment.features,
        rule_chain,
        rule: assessment.rule,
        verdict: assessment.verdict,
        path,
    }
}

#[must_use]
pub fn run_explain(args: &ExplainArgs, cli: &Cli) -> i32 {
    match run_explain_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            report_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

pub(crate) fn run_explain_impl(args: &ExplainArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let root = args
        .root
        .clone()
        .or(config.manifest.root)
        .unwrap_or_else(|| PathBuf::from("."));

    let explanation = explain_path(&args.path, &FsContentSource::new(root));
    println!("{}", format_explanation(&explanation, args.format)?);
    Ok(())
}

fn format_explanation(exp: &Explanation, format: ExplainFormat) -> Result<String> {
    match format {
        ExplainFormat::Text => Ok(format_text(exp)),
        ExplainFormat::Json => Ok(serde_json::to_string_pretty(exp)?),
    }
}

fn format_text(exp: &Explanation) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Path:     {}", exp.path);
    let _ = writeln!(output, "Category: {}", exp.classification);
    let content = match (exp.content, exp.features.is_some()) {
        (ContentState::Read, true) => "read and probed",
        (ContentState::Read, false) => "read, not probed (decided by path)",
        (ContentState::Missing, _) => "missing",
        (ContentState::Unreadable, _) => "unreadable",
    };
    let _ = writeln!(output, "Content:  {content}");

    if let Some(features) = &exp.features {
        output.push('\n');
        let _ = writeln!(output, "  Content Features:");
        for (name, present) in features.entries() {
            let mark = if present { "x" } else { " " };
            let _ = writeln!(output, "    [{mark}] {name}");
        }
    }

    if !exp.rule_chain.is_empty() {
        output.push('\n');
        let _ = writeln!(output, "  Rule Chain (first match wins):");
        for candidate in &exp.rule_chain {
            let (status_char, status_desc) = match candidate.status {
                MatchStatus::Matched => ("+", "(MATCHED)"),
                MatchStatus::Superseded => ("-", "(superseded)"),
                MatchStatus::NoMatch => (" ", "(no match)"),
            };
            let _ = writeln!(
                output,
                "    [{status_char}] {} -> {} {status_desc}",
                candidate.rule, candidate.outcome
            );
        }
    }

    let verdict = &exp.verdict;
    output.push('\n');
    let _ = writeln!(
        output,
        "Verdict:  {} {} (rule: {})",
        verdict.status.symbol(),
        verdict.status,
        exp.rule
    );
    let _ = writeln!(output, "  Note:   {}", verdict.note);
    if !verdict.issue.is_empty() {
        let _ = writeln!(output, "  Issue:  {}", verdict.issue);
    }
    if !verdict.plan.is_empty() {
        let _ = writeln!(output, "  Plan:   {}", verdict.plan);
    }

    output
}

#[cfg(test)]
#[path = "explain_tests.rs"]
mod tests;
