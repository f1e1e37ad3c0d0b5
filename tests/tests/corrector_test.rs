use std::fs;
use std::path::Path;

use edffix_core::corrector::{self, FileReport, Outcome, CLIPPING_DATE, WRONG_DATE};
use edffix_core::error::Error;
use edffix_integration_tests::{edf_bytes, stored_date, write_edf};
use tempfile::TempDir;

fn run(root: &Path) -> (usize, Vec<FileReport>) {
    let mut reports = Vec::new();
    let processed = corrector::process(root, |r| reports.push(r.clone())).unwrap();
    (processed, reports)
}

#[test]
fn mixed_directory_corrects_only_the_sentinel() {
    let dir = TempDir::new().unwrap();
    let a = write_edf(dir.path(), "a.edf", WRONG_DATE);
    let b = write_edf(dir.path(), "b.edf", "12.05.90");
    let b_before = fs::read(&b).unwrap();

    let (processed, reports) = run(dir.path());

    assert_eq!(processed, 2);
    assert_eq!(
        reports[0].outcome,
        Outcome::Corrected {
            from: WRONG_DATE.to_string(),
            to: CLIPPING_DATE.to_string(),
        }
    );
    assert_eq!(
        reports[1].outcome,
        Outcome::Unchanged {
            date: "12.05.90".to_string()
        }
    );

    assert_eq!(stored_date(&a), CLIPPING_DATE);
    assert_eq!(fs::read(&b).unwrap(), b_before);
}

#[test]
fn second_run_is_idempotent() {
    let dir = TempDir::new().unwrap();
    write_edf(dir.path(), "a.edf", WRONG_DATE);
    write_edf(dir.path(), "b.edf", "12.05.90");

    run(dir.path());
    let snapshot: Vec<Vec<u8>> = ["a.edf", "b.edf"]
        .iter()
        .map(|n| fs::read(dir.path().join(n)).unwrap())
        .collect();

    let (processed, reports) = run(dir.path());

    assert_eq!(processed, 2);
    assert!(reports
        .iter()
        .all(|r| matches!(r.outcome, Outcome::Unchanged { .. })));
    for (name, before) in ["a.edf", "b.edf"].iter().zip(&snapshot) {
        assert_eq!(&fs::read(dir.path().join(name)).unwrap(), before);
    }
}

#[test]
fn near_miss_dates_are_not_matched() {
    let dir = TempDir::new().unwrap();
    let short = write_edf(dir.path(), "short.edf", "0.0.0");
    let colons = write_edf(dir.path(), "colons.edf", "00:00:00");

    let (_, reports) = run(dir.path());

    assert!(reports
        .iter()
        .all(|r| matches!(r.outcome, Outcome::Unchanged { .. })));
    assert_eq!(stored_date(&short), "0.0.0");
    assert_eq!(stored_date(&colons), "00:00:00");
}

#[test]
fn empty_directory_yields_no_reports() {
    let dir = TempDir::new().unwrap();
    let (processed, reports) = run(dir.path());
    assert_eq!(processed, 0);
    assert!(reports.is_empty());
}

#[test]
fn recordings_in_subdirectories_are_reached() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("night2")).unwrap();
    let nested = write_edf(&dir.path().join("night2"), "rec.EDF", WRONG_DATE);

    let (processed, _) = run(dir.path());

    assert_eq!(processed, 1);
    assert_eq!(stored_date(&nested), CLIPPING_DATE);
}

#[test]
fn non_edf_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("notes.txt"), edf_bytes(WRONG_DATE)).unwrap();

    let (processed, _) = run(dir.path());

    assert_eq!(processed, 0);
    assert_eq!(stored_date(&dir.path().join("notes.txt")), WRONG_DATE);
}

#[test]
fn truncated_recording_aborts_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.edf"), vec![b' '; 64]).unwrap();
    let later = write_edf(dir.path(), "z.edf", WRONG_DATE);

    let mut reports = Vec::new();
    let err = corrector::process(dir.path(), |r| reports.push(r.clone())).unwrap_err();

    assert!(matches!(err, Error::Truncated { len: 64, .. }));
    assert!(reports.is_empty());
    // Abort on first error: the file sorting after the bad one is untouched.
    assert_eq!(stored_date(&later), WRONG_DATE);
}
