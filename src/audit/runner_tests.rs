use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::audit::ComplianceStatus;
use crate::manifest::parse_manifest;
use crate::source::MemoryContentSource;

fn sample_source() -> MemoryContentSource {
    MemoryContentSource::new()
        .with_file(
            "backend/controllers/userController.js",
            "router.get('/', requirePageAccess('users'), list);",
        )
        .with_file("backend/routes/hr.js", "router.post('/', requireRole('hr'), create);")
        .with_file("backend/tests/user.test.js", "requireRole('x')")
        .with_file(
            "react/src/feature-module/hr/EmployeeList.tsx",
            "export default withRoleCheck(EmployeeList);",
        )
        .with_file("react/src/App.tsx", "export default App;")
        .with_file("docs/README.md", "# docs")
}

const MANIFEST: &str = "\
1→backend/controllers/userController.js
2→backend/routes/hr.js
3→backend/tests/user.test.js

5→react/src/feature-module/hr/EmployeeList.tsx
6→react/src/App.tsx
7→backend/controllers/missingController.js
8→docs/README.md
";

#[test]
fn one_row_per_entry_in_manifest_order() {
    let manifest = parse_manifest(MANIFEST, true);
    let report = audit_entries(&manifest.entries, &sample_source(), || {});

    assert_eq!(report.rows.len(), manifest.entries.len());
    assert_eq!(report.tally.total(), manifest.entries.len());
    let indices: Vec<_> = report.rows.iter().map(|r| r.index).collect();
    assert_eq!(indices, vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn verdicts_and_tally() {
    let manifest = parse_manifest(MANIFEST, true);
    let report = audit_entries(&manifest.entries, &sample_source(), || {});

    let statuses: Vec<_> = report.rows.iter().map(|r| r.verdict.status).collect();
    assert_eq!(
        statuses,
        vec![
            ComplianceStatus::Compliant,
            ComplianceStatus::NeedsMigration,
            ComplianceStatus::NotNeeded,
            ComplianceStatus::NeedsMigration,
            ComplianceStatus::PartialReview,
            ComplianceStatus::NotFound,
            ComplianceStatus::NotNeeded,
        ]
    );

    assert_eq!(report.tally.compliant, 1);
    assert_eq!(report.tally.needs_migration, 2);
    assert_eq!(report.tally.partial_review, 1);
    assert_eq!(report.tally.not_needed, 2);
    assert_eq!(report.tally.not_found, 1);
}

#[test]
fn progress_callback_runs_once_per_entry() {
    let manifest = parse_manifest(MANIFEST, true);
    let seen = AtomicUsize::new(0);
    let _ = audit_entries(&manifest.entries, &sample_source(), || {
        seen.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(seen.load(Ordering::Relaxed), manifest.entries.len());
}

#[test]
fn repeated_runs_are_identical() {
    let manifest = parse_manifest(MANIFEST, true);
    let source = sample_source();
    let first = audit_entries(&manifest.entries, &source, || {});
    let second = audit_entries(&manifest.entries, &source, || {});
    assert_eq!(first, second);
}

#[test]
fn unsorted_entries_are_reported_by_line_number() {
    let entries = vec![
        ManifestEntry {
            index: 9,
            path: "react/src/App.tsx".to_string(),
        },
        ManifestEntry {
            index: 2,
            path: "backend/routes/hr.js".to_string(),
        },
    ];
    let report = audit_entries(&entries, &sample_source(), || {});
    assert_eq!(report.rows[0].path, "backend/routes/hr.js");
    assert_eq!(report.rows[1].path, "react/src/App.tsx");
}

#[test]
fn tally_matches_sequential_count() {
    let manifest = parse_manifest(MANIFEST, true);
    let report = audit_entries(&manifest.entries, &sample_source(), || {});
    let sequential: ComplianceTally = report.rows.iter().map(|r| &r.verdict).collect();
    assert_eq!(report.tally, sequential);
}

#[test]
fn malformed_lines_are_only_skipped() {
    let manifest = parse_manifest("Found 3 files:\n1→backend/routes/hr.js\n", true);
    let report = audit_entries(&manifest.entries, &sample_source(), || {})
        .with_skipped(manifest.malformed.len());

    assert_eq!(report.tally.total(), 1);
    assert_eq!(report.tally.not_found, 0);
    assert_eq!(report.skipped, 1);
}

#[test]
fn empty_manifest_yields_empty_report() {
    let report = audit_entries(&[], &sample_source(), || {});
    assert!(report.rows.is_empty());
    assert_eq!(report.tally.total(), 0);
}
