use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while enumerating or patching recordings.
///
/// The run aborts on the first of these; there is no per-file recovery.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file ends before the 256-byte fixed header does.
    #[error("{path}: fixed header truncated ({len} bytes)")]
    Truncated { path: PathBuf, len: u64 },

    /// A header update carried a value the field cannot hold.
    #[error("invalid header field value {value:?}: expected at most 8 printable ASCII bytes")]
    InvalidFieldValue { value: String },

    #[error("directory walk failed")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
