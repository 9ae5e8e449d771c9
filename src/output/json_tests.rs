use std::path::{Path, PathBuf};

use super::*;
use crate::deleter::{DeletionSummary, Outcome};
use crate::error::DeletionError;

fn finish(mut reporter: JsonReporter<Vec<u8>>, summary: &RunSummary) -> serde_json::Value {
    reporter.finished(summary);
    serde_json::from_slice(&reporter.into_inner()).unwrap()
}

fn scan_of(paths: &[&str]) -> ScanResult {
    ScanResult {
        candidates: paths.iter().map(PathBuf::from).collect(),
        ..ScanResult::default()
    }
}

#[test]
fn json_empty_run() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("proj"));
    r.scan_finished(&ScanResult::default(), false);

    let json = finish(r, &RunSummary::default());

    assert_eq!(json["root"], "proj");
    assert_eq!(json["summary"]["found"], 0);
    assert_eq!(json["candidates"].as_array().unwrap().len(), 0);
    assert_eq!(json["interrupted"], false);
}

#[test]
fn json_records_each_outcome() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("proj"));
    r.scan_finished(&scan_of(&["proj/a/bin", "proj/b/obj"]), false);
    r.candidate_finished(&CandidateOutcome {
        path: PathBuf::from("proj/a/bin"),
        outcome: Outcome::Deleted,
    });
    r.candidate_finished(&CandidateOutcome {
        path: PathBuf::from("proj/b/obj"),
        outcome: Outcome::Failed(DeletionError::NotFound),
    });

    let json = finish(
        r,
        &RunSummary {
            found: 2,
            dry_run: false,
            scan_interrupted: false,
            deletion: DeletionSummary {
                deleted: 1,
                failed: 1,
                cancelled: 0,
            },
        },
    );

    let candidates = json["candidates"].as_array().unwrap();
    assert_eq!(candidates[0]["path"], "proj/a/bin");
    assert_eq!(candidates[0]["status"], "deleted");
    assert!(candidates[0].get("error").is_none());
    assert_eq!(candidates[1]["status"], "failed");
    assert_eq!(candidates[1]["error"], "not found");
    assert_eq!(json["summary"]["deleted"], 1);
    assert_eq!(json["summary"]["failed"], 1);
}

#[test]
fn json_dry_run_leaves_candidates_pending() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("."));
    r.scan_finished(&scan_of(&["./bin"]), true);

    let json = finish(
        r,
        &RunSummary {
            found: 1,
            dry_run: true,
            scan_interrupted: false,
            deletion: DeletionSummary::default(),
        },
    );

    assert_eq!(json["dry_run"], true);
    assert_eq!(json["candidates"][0]["status"], "pending");
}

#[test]
fn json_interrupted_flag() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("."));
    r.scan_finished(&scan_of(&["./bin"]), false);
    r.candidate_finished(&CandidateOutcome {
        path: PathBuf::from("./bin"),
        outcome: Outcome::Cancelled,
    });

    let json = finish(
        r,
        &RunSummary {
            found: 1,
            dry_run: false,
            scan_interrupted: false,
            deletion: DeletionSummary {
                deleted: 0,
                failed: 0,
                cancelled: 1,
            },
        },
    );

    assert_eq!(json["interrupted"], true);
    assert_eq!(json["candidates"][0]["status"], "cancelled");
}

#[test]
fn json_outcomes_follow_candidate_order_even_with_equal_paths() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("."));
    r.scan_finished(&scan_of(&["./bin", "./bin", "./obj"]), false);
    for outcome in [
        Outcome::Failed(DeletionError::NotADirectory),
        Outcome::Deleted,
        Outcome::Cancelled,
    ] {
        r.candidate_finished(&CandidateOutcome {
            path: PathBuf::from("./bin"),
            outcome,
        });
    }

    let json = finish(
        r,
        &RunSummary {
            found: 3,
            dry_run: false,
            scan_interrupted: false,
            deletion: DeletionSummary {
                deleted: 1,
                failed: 1,
                cancelled: 1,
            },
        },
    );

    let statuses: Vec<_> = json["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["status"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(statuses, vec!["failed", "deleted", "cancelled"]);
}

#[test]
fn json_scan_interrupt_sets_flag_and_leaves_candidates_pending() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("."));
    r.scan_finished(&scan_of(&["./bin"]), false);

    let json = finish(
        r,
        &RunSummary {
            found: 1,
            scan_interrupted: true,
            ..RunSummary::default()
        },
    );

    assert_eq!(json["interrupted"], true);
    assert_eq!(json["summary"]["cancelled"], 0);
    assert_eq!(json["candidates"][0]["status"], "pending");
}

#[test]
fn json_lists_skipped_directories_with_reason() {
    let mut r = JsonReporter::new(Vec::new());
    r.scan_started(Path::new("."));
    r.scan_finished(
        &ScanResult {
            skipped: vec![crate::error::ListingError {
                path: PathBuf::from("./locked"),
                source: std::io::Error::new(
                    std::io::ErrorKind::PermissionDenied,
                    "permission denied",
                ),
            }],
            ..ScanResult::default()
        },
        false,
    );

    let json = finish(r, &RunSummary::default());

    assert_eq!(json["skipped"][0]["path"], "./locked");
    assert_eq!(json["skipped"][0]["reason"], "permission denied");
}
