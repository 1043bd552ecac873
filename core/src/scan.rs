use std::fs;
use std::path::{Path, PathBuf};

use archivr_common::error::ArchiveError;

/// Case-sensitive suffix a file name must carry to be archived.
pub const CSV_SUFFIX: &str = ".csv";

/// A direct child of the working directory eligible for archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base_name: String,
    pub path: PathBuf,
}

/// Lists candidate files at depth one.
///
/// Only regular files count; directories and symlinks are skipped even when
/// their name ends in `.csv`. Results are sorted by base name so a fixed
/// directory snapshot always enumerates in the same order.
pub fn candidates(work_dir: &Path) -> Result<Vec<Candidate>, ArchiveError> {
    let scan_err = |source| ArchiveError::Scan {
        path: work_dir.to_path_buf(),
        source,
    };

    let mut found = Vec::new();
    for entry in fs::read_dir(work_dir).map_err(scan_err)? {
        let entry = entry.map_err(scan_err)?;
        // file_type() does not follow symlinks, so a link named `x.csv`
        // reports as a symlink and falls through here.
        let Ok(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name();
        if !name.as_encoded_bytes().ends_with(CSV_SUFFIX.as_bytes()) {
            continue;
        }
        // Suffix matching is byte-level so non-UTF-8 names still qualify.
        // Such names are carried under their lossy rendering; the real path
        // is what gets read and moved.
        found.push(Candidate {
            base_name: name.to_string_lossy().into_owned(),
            path: entry.path(),
        });
    }

    found.sort_by(|a, b| a.base_name.cmp(&b.base_name));
    Ok(found)
}
