//! Enumeration of EDF recordings under a root directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Error;

/// Lazily yields every regular file under `root` whose extension is `edf`
/// (ASCII case-insensitive), recursing into subdirectories.
///
/// The root is an explicit parameter so callers can point the scan at a
/// scratch directory in tests. Entries come back in file-name order within
/// each directory, which keeps runs over the same tree deterministic. The
/// iterator is finite and can be recreated at will; a missing root surfaces
/// as the first item's error.
pub fn edf_paths(root: &Path) -> impl Iterator<Item = Result<PathBuf, Error>> + use<> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => (entry.file_type().is_file() && has_edf_extension(entry.path()))
                .then(|| Ok(entry.into_path())),
            Err(source) => Some(Err(Error::Walk(source))),
        })
}

fn has_edf_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("edf"))
}
