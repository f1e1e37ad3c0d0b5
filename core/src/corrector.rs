//! The correction pass: find sentinel start dates and rewrite them.
//!
//! Some recorders ship with an unset hardware clock and stamp every file
//! with `00.00.00`, which downstream analysis tools reject when they try to
//! parse the date. The pass swaps that sentinel for a fixed, parseable
//! placeholder and leaves every other file alone.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;
use crate::header::{EdfFile, HeaderUpdate};
use crate::scan;

/// Start date written by recorders that never had their clock set.
pub const WRONG_DATE: &str = "00.00.00";

/// Replacement accepted by tools that choke on the sentinel.
pub const CLIPPING_DATE: &str = "01.01.85";

/// What happened to a single recording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Corrected { from: String, to: String },
    Unchanged { date: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Examines one recording and rewrites its start date if it equals
/// [`WRONG_DATE`] exactly.
///
/// The match is case- and format-sensitive; `0.0.0` or `00:00:00` stay as
/// they are. Non-matching files are never opened for writing.
pub fn correct_file(path: &Path) -> Result<FileReport, Error> {
    let mut edf = EdfFile::open(path)?;
    let date = edf.start_date_of_recording().to_string();

    if date != WRONG_DATE {
        debug!(path = %path.display(), date, "start date already set");
        return Ok(FileReport {
            path: path.to_path_buf(),
            outcome: Outcome::Unchanged { date },
        });
    }

    edf.apply_header_update(&HeaderUpdate {
        start_date_of_recording: Some(CLIPPING_DATE.to_string()),
    })?;

    Ok(FileReport {
        path: path.to_path_buf(),
        outcome: Outcome::Corrected {
            from: date,
            to: edf.start_date_of_recording().to_string(),
        },
    })
}

/// Walks `root` and corrects each recording in turn, strictly sequentially.
///
/// `on_report` runs once per file, after that file's write has been
/// persisted and before the next file is opened, so an interrupted run
/// leaves every reported file in its final state. The first error aborts
/// the walk; files not yet reached stay unexamined. Returns the number of
/// files processed.
pub fn process<F>(root: &Path, mut on_report: F) -> Result<usize, Error>
where
    F: FnMut(&FileReport),
{
    let mut processed = 0;
    for path in scan::edf_paths(root) {
        let report = correct_file(&path?)?;
        on_report(&report);
        processed += 1;
    }
    Ok(processed)
}
