//! The archiving engine: ensure the archive directory exists, enumerate
//! candidates, then log-then-move each one in order.
//!
//! The log record is always written before the move, so every file that
//! reaches the archive directory has a record carrying its pre-move bytes.
//!
//! Overlapping invocations against the same working directory are not safe:
//! two runs can both enumerate a candidate and race on the move. Callers
//! must not run the archiver concurrently over one directory. Only the log
//! append itself is guarded (see [`crate::journal`]).

use std::fs;
use std::path::PathBuf;

use archivr_common::config::Config;
use archivr_common::error::{ArchiveError, FileFailure};
use chrono::Local;
use tracing::error;

use crate::journal::Journal;
use crate::mover;
use crate::naming;
use crate::scan;

/// One completed archive action.
#[derive(Debug, Clone)]
pub struct ArchivedFile {
    pub base_name: String,
    pub new_name: String,
    pub destination: PathBuf,
}

/// Outcome of a full run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub archived: Vec<ArchivedFile>,
    pub failed: Vec<FileFailure>,
}

impl RunReport {
    /// True when enumeration matched nothing at all. A candidate that was
    /// found but failed still counts as found.
    pub fn found_nothing(&self) -> bool {
        self.archived.is_empty() && self.failed.is_empty()
    }
}

/// Archives every candidate in `cfg.work_dir`.
///
/// `on_archived` fires after each successful move so a front end can report
/// progress while the run is still going; the same files are also collected
/// into the returned report.
///
/// Per-file failures are logged and skipped. Directory-creation, scan, and
/// log-append failures are fatal and returned as errors; whatever was
/// archived before a fatal log failure has already been reported through the
/// callback.
pub fn run(
    cfg: &Config,
    on_archived: Option<&dyn Fn(&ArchivedFile)>,
) -> Result<RunReport, ArchiveError> {
    fs::create_dir_all(&cfg.archive_dir).map_err(|source| ArchiveError::CreateArchiveDir {
        path: cfg.archive_dir.clone(),
        source,
    })?;

    let candidates = scan::candidates(&cfg.work_dir)?;
    let journal = Journal::new(&cfg.log_file);
    let mut report = RunReport::default();

    for candidate in candidates {
        let now = Local::now();
        let new_name = naming::archive_name(&candidate.base_name, now);
        let destination = cfg.archive_dir.join(&new_name);

        // Read before the move so the record captures the pre-move bytes.
        let content = match fs::read(&candidate.path) {
            Ok(content) => content,
            Err(source) => {
                let failure = FileFailure::Unreadable {
                    name: candidate.base_name.clone(),
                    source,
                };
                error!("{failure}");
                report.failed.push(failure);
                continue;
            }
        };

        journal.append(&candidate.base_name, &new_name, &content, now)?;

        if let Err(source) = mover::move_file(&candidate.path, &destination) {
            let failure = FileFailure::Move {
                name: candidate.base_name.clone(),
                dest: destination,
                source,
            };
            error!("{failure} (log record already written)");
            report.failed.push(failure);
            continue;
        }

        let archived = ArchivedFile {
            base_name: candidate.base_name,
            new_name,
            destination,
        };
        if let Some(callback) = on_archived {
            callback(&archived);
        }
        report.archived.push(archived);
    }

    Ok(report)
}
