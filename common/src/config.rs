use std::path::PathBuf;

/// Archive subdirectory created inside the working directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";
/// Append-only log living next to the candidate files.
pub const DEFAULT_LOG_FILE: &str = "organizer.log";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory scanned for candidate `.csv` files.
    ///
    /// Scanning is depth one; subdirectories are never entered.
    pub work_dir: PathBuf,
    /// Destination for archived files, created on demand.
    pub archive_dir: PathBuf,
    /// Running log of every archived file's name and content.
    pub log_file: PathBuf,
    /// 0 = full output, 1 = no headers, 2 = results only.
    pub quiet: u8,
}

impl Config {
    /// Defaults relative to the working directory:
    /// `<dir>/archive` and `<dir>/organizer.log`.
    pub fn new(work_dir: PathBuf) -> Self {
        let archive_dir = work_dir.join(DEFAULT_ARCHIVE_DIR);
        let log_file = work_dir.join(DEFAULT_LOG_FILE);
        Self {
            work_dir,
            archive_dir,
            log_file,
            quiet: 0,
        }
    }
}
