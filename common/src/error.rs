use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end the run.
///
/// Directory creation and scanning fail before any file is touched. A failed
/// log append ends the run mid-way: moving files without a paired record
/// would break the one-record-per-move invariant.
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot create archive directory {}: {source}", path.display())]
    CreateArchiveDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot scan working directory {}: {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot append to log file {}: {source}", path.display())]
    LogAppend {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Per-file failures; the run continues with the next candidate.
#[derive(Debug, Error)]
pub enum FileFailure {
    /// The file vanished or lost read permission between enumeration and
    /// logging. Nothing was written for it.
    #[error("cannot read {name}: {source}")]
    Unreadable {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The move failed after its log record was written. The orphaned
    /// record is reported, never rolled back.
    #[error("cannot move {name} to {}: {source}", dest.display())]
    Move {
        name: String,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },
}
