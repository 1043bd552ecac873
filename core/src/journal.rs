use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use archivr_common::error::ArchiveError;
use chrono::{DateTime, Local};
use fs2::FileExt;

/// The append-only archive log.
///
/// One record per archived file: a timestamped header naming the move, the
/// file's bytes as read before the move, and a trailing blank line. Records
/// are never rewritten or truncated.
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record, creating the log on first use.
    ///
    /// The record is assembled up front and written with a single call while
    /// holding an exclusive advisory lock, so a cooperating process never
    /// interleaves inside a record. The lock does not make concurrent
    /// archiver invocations safe overall; enumeration and the move itself
    /// still race.
    pub fn append(
        &self,
        base_name: &str,
        new_name: &str,
        content: &[u8],
        at: DateTime<Local>,
    ) -> Result<(), ArchiveError> {
        let header = format!(
            "[{}] {} -> {}\n",
            at.format("%Y-%m-%dT%H:%M:%S%:z"),
            base_name,
            new_name
        );

        let mut record = Vec::with_capacity(header.len() + content.len() + 2);
        record.extend_from_slice(header.as_bytes());
        record.extend_from_slice(content);
        // The separator must be an actual empty line even when the body
        // does not end in a newline.
        if !content.ends_with(b"\n") {
            record.push(b'\n');
        }
        record.push(b'\n');

        self.write_record(&record)
            .map_err(|source| ArchiveError::LogAppend {
                path: self.path.clone(),
                source,
            })
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.lock_exclusive()?;
        let written = file.write_all(record).and_then(|_| file.flush());
        let _ = FileExt::unlock(&file);
        written
    }
}
