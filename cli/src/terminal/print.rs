use std::path::Path;

use colored::*;
use edffix_core::corrector::{FileReport, Outcome};

/// One status line per recording, mirroring the correction outcome:
///
/// ```text
/// 00.00.00 to 01.01.85 for night1/a.edf
///    OK       12.05.90 for night1/b.edf
/// ```
pub fn file_report(root: &Path, report: &FileReport) {
    println!("{}", status_line(root, report));
}

fn status_line(root: &Path, report: &FileReport) -> String {
    let name = display_name(root, &report.path);
    match &report.outcome {
        Outcome::Corrected { from, to } => {
            format!("{} to {} for {}", from.red(), to.green(), name)
        }
        Outcome::Unchanged { date } => {
            format!("{}       {} for {}", "   OK".green(), date, name)
        }
    }
}

/// Paths are reported relative to the scan root where possible.
fn display_name(root: &Path, path: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
