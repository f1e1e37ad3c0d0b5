//! Access to the fixed portion of an EDF file header.
//!
//! Every EDF recording starts with a 256-byte printable-ASCII block holding
//! the recording metadata. Only the start-date-of-recording field (bytes
//! 168..176, `DD.MM.YY`, space padded) is interpreted here; the rest of the
//! header and all signal data are carried opaquely and never touched.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::Error;

/// Size of the fixed EDF header block.
pub const FIXED_HEADER_LEN: usize = 256;

/// Byte offset of the start-date-of-recording field.
pub const START_DATE_OFFSET: u64 = 168;

/// Width of the start-date-of-recording field.
pub const START_DATE_LEN: usize = 8;

/// A typed header mutation request.
///
/// Fields left as `None` are untouched; an all-`None` request is a no-op.
#[derive(Debug, Default, Clone)]
pub struct HeaderUpdate {
    pub start_date_of_recording: Option<String>,
}

/// An open handle to one EDF recording on disk.
///
/// Holds the fixed header read at open time. Updates go through
/// [`EdfFile::apply_header_update`], which keeps the in-memory copy and the
/// bytes on disk in step.
#[derive(Debug)]
pub struct EdfFile {
    path: PathBuf,
    header: [u8; FIXED_HEADER_LEN],
}

impl EdfFile {
    /// Reads the fixed header of the recording at `path`.
    pub fn open(path: &Path) -> Result<Self, Error> {
        let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut header = [0u8; FIXED_HEADER_LEN];

        if let Err(source) = file.read_exact(&mut header) {
            if source.kind() == ErrorKind::UnexpectedEof {
                let len = file.metadata().map(|m| m.len()).unwrap_or(0);
                return Err(Error::Truncated {
                    path: path.to_path_buf(),
                    len,
                });
            }
            return Err(Error::io(path, source));
        }

        Ok(Self {
            path: path.to_path_buf(),
            header,
        })
    }

    /// Identifying path of the recording.
    pub fn filename(&self) -> &Path {
        &self.path
    }

    /// The `DD.MM.YY` start date with trailing space padding stripped.
    ///
    /// Downstream comparisons are exact string equality, so no further
    /// normalisation happens here.
    pub fn start_date_of_recording(&self) -> &str {
        let raw = &self.header[START_DATE_OFFSET as usize..][..START_DATE_LEN];
        std::str::from_utf8(raw)
            .map(|s| s.trim_end_matches(' '))
            .unwrap_or("")
    }

    /// Applies `update` in place and flushes before returning.
    ///
    /// The value is validated first; a rejected update leaves the file
    /// untouched. On success the write is durable before this returns, so a
    /// caller iterating many files never batches pending writes.
    pub fn apply_header_update(&mut self, update: &HeaderUpdate) -> Result<(), Error> {
        let Some(date) = update.start_date_of_recording.as_deref() else {
            return Ok(());
        };
        let field = encode_field(date)?;

        let mut file = OpenOptions::new()
            .write(true)
            .open(&self.path)
            .map_err(|e| Error::io(&self.path, e))?;
        file.seek(SeekFrom::Start(START_DATE_OFFSET))
            .map_err(|e| Error::io(&self.path, e))?;
        file.write_all(&field)
            .map_err(|e| Error::io(&self.path, e))?;
        file.sync_data().map_err(|e| Error::io(&self.path, e))?;

        self.header[START_DATE_OFFSET as usize..][..START_DATE_LEN].copy_from_slice(&field);
        debug!(path = %self.path.display(), date, "start date rewritten");
        Ok(())
    }
}

/// Space-pads `value` to field width. Header fields are printable ASCII.
fn encode_field(value: &str) -> Result<[u8; START_DATE_LEN], Error> {
    let printable = value.bytes().all(|b| (0x20..=0x7e).contains(&b));
    if value.len() > START_DATE_LEN || !printable {
        return Err(Error::InvalidFieldValue {
            value: value.to_string(),
        });
    }

    let mut field = [b' '; START_DATE_LEN];
    field[..value.len()].copy_from_slice(value.as_bytes());
    Ok(field)
}
