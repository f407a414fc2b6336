use super::*;

fn tally_of(statuses: &[(ComplianceStatus, usize)]) -> ComplianceTally {
    let mut tally = ComplianceTally::new();
    for &(status, n) in statuses {
        for _ in 0..n {
            tally.record_status(status);
        }
    }
    tally
}

#[test]
fn empty_tally_has_no_rate() {
    let tally = ComplianceTally::new();
    assert_eq!(tally.total(), 0);
    assert_eq!(tally.compliance_rate(), None);
}

#[test]
fn rate_excludes_not_needed_and_not_found() {
    let tally = tally_of(&[
        (ComplianceStatus::Compliant, 3),
        (ComplianceStatus::NeedsMigration, 1),
        (ComplianceStatus::PartialReview, 1),
        (ComplianceStatus::NotNeeded, 5),
    ]);

    assert_eq!(tally.total(), 10);
    assert_eq!(tally.actionable(), 5);
    let rate = tally.compliance_rate().unwrap();
    assert!((rate - 60.0).abs() < 1e-9);
    assert_eq!(format!("{rate:.1}"), "60.0");
}

#[test]
fn only_unactionable_files_have_no_rate() {
    let tally = tally_of(&[
        (ComplianceStatus::NotNeeded, 4),
        (ComplianceStatus::NotFound, 2),
    ]);
    assert_eq!(tally.total(), 6);
    assert_eq!(tally.compliance_rate(), None);
}

#[test]
fn record_uses_verdict_status() {
    let mut tally = ComplianceTally::new();
    tally.record(&Verdict::file_not_found());
    tally.record(&Verdict::unknown_file_type());
    assert_eq!(tally.not_found, 1);
    assert_eq!(tally.not_needed, 1);
    assert_eq!(tally.count(ComplianceStatus::NotFound), 1);
}

#[test]
fn collect_from_verdicts() {
    let verdicts = [
        Verdict::new(ComplianceStatus::Compliant, "ok"),
        Verdict::new(ComplianceStatus::PartialReview, "review"),
        Verdict::new(ComplianceStatus::Compliant, "ok"),
    ];
    let tally: ComplianceTally = verdicts.iter().collect();
    assert_eq!(tally.compliant, 2);
    assert_eq!(tally.partial_review, 1);
    assert_eq!(tally.total(), 3);
}

#[test]
fn counts_cover_every_status() {
    let tally = tally_of(&[
        (ComplianceStatus::Compliant, 1),
        (ComplianceStatus::NotNeeded, 2),
        (ComplianceStatus::NeedsMigration, 3),
        (ComplianceStatus::PartialReview, 4),
        (ComplianceStatus::NotFound, 5),
    ]);
    let sum: usize = ComplianceStatus::ALL.iter().map(|&s| tally.count(s)).sum();
    assert_eq!(sum, tally.total());
}

#[test]
fn merge_adds_counts_in_any_order() {
    let left = tally_of(&[
        (ComplianceStatus::Compliant, 2),
        (ComplianceStatus::NotFound, 1),
    ]);
    let right = tally_of(&[
        (ComplianceStatus::NeedsMigration, 3),
        (ComplianceStatus::Compliant, 1),
    ]);

    let mut forward = left;
    forward.merge(&right);
    let mut backward = right;
    backward.merge(&left);

    assert_eq!(forward, backward);
    assert_eq!(forward.compliant, 3);
    assert_eq!(forward.needs_migration, 3);
    assert_eq!(forward.not_found, 1);
    assert_eq!(forward.total(), left.total() + right.total());
}

#[test]
fn merge_with_empty_is_identity() {
    let tally = tally_of(&[(ComplianceStatus::PartialReview, 4)]);
    let mut merged = tally;
    merged.merge(&ComplianceTally::new());
    assert_eq!(merged, tally);
}
