use super::*;
use crate::audit::Verdict;

fn sample_report() -> AuditReport {
    let rows = vec![
        ReportRow {
            index: 1,
            path: "backend/controllers/userController.js".to_string(),
            rule: "controller-page-access",
            verdict: Verdict::new(ComplianceStatus::Compliant, "Using requirePageAccess middleware"),
        },
        ReportRow {
            index: 2,
            path: "backend/routes/hr.js".to_string(),
            rule: "routes-legacy-role",
            verdict: Verdict::new(
                ComplianceStatus::NeedsMigration,
                "Routes use legacy requireRole middleware",
            )
            .with_issue("requireRole() should be replaced with requirePageAccess()")
            .with_plan("Replace requireRole with requirePageAccess"),
        },
        ReportRow {
            index: 3,
            path: "react/src/App.tsx".to_string(),
            rule: "frontend-default",
            verdict: Verdict::new(ComplianceStatus::PartialReview, "React file - needs manual review")
                .with_plan("Review for RBAC compliance"),
        },
    ];
    let tally = rows.iter().map(|r| &r.verdict).collect();
    AuditReport {
        rows,
        tally,
        skipped: 0,
    }
}

#[test]
fn default_output_is_summary_only() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();

    assert!(output.starts_with("RBAC Compliance Summary\n"));
    assert!(output.contains("✅ Fully Compliant: 1\n"));
    assert!(output.contains("❌ Needs Migration: 1\n"));
    assert!(output.contains("🔄 Partial/Review Needed: 1\n"));
    assert!(output.contains("Total Files: 3\n"));
    assert!(output.contains("RBAC Compliance Rate: 33.3%\n"));
    assert!(!output.contains("backend/routes/hr.js"));
    assert!(!output.contains("Skipped"));
}

#[test]
fn skipped_lines_shown_when_present() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&sample_report().with_skipped(1))
        .unwrap();

    assert!(output.contains("Total Files: 3\nSkipped Manifest Lines: 1\n"));
}

#[test]
fn verbose_lists_actionable_files() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("❌ NEEDS MIGRATION: backend/routes/hr.js\n"));
    assert!(output.contains("   Issue: requireRole() should be replaced with requirePageAccess()\n"));
    assert!(output.contains("   Plan: Replace requireRole with requirePageAccess\n"));
    assert!(output.contains("🔄 REVIEW: react/src/App.tsx\n"));
    assert!(!output.contains("COMPLIANT: backend/controllers"));
}

#[test]
fn very_verbose_lists_every_file() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 2)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("✅ COMPLIANT: backend/controllers/userController.js\n"));
    assert!(output.contains("   Using requirePageAccess middleware\n"));
}

#[test]
fn colors_only_when_enabled() {
    let plain = TextFormatter::new(ColorMode::Never)
        .format(&sample_report())
        .unwrap();
    assert!(!plain.contains("\x1b["));

    let colored = TextFormatter::new(ColorMode::Always)
        .format(&sample_report())
        .unwrap();
    assert!(colored.contains("\x1b[32m1\x1b[0m"));
}
