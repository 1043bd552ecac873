use chrono::{DateTime, Local};

use crate::scan::CSV_SUFFIX;

/// Compact wall-clock stamp embedded in archived file names.
pub fn file_stamp(at: DateTime<Local>) -> String {
    at.format("%Y%m%d-%H%M%S").to_string()
}

/// `grades.csv` processed at T becomes `grades-<YYYYMMDD-HHMMSS>.csv`.
///
/// Only the final `.csv` is stripped, so `a.csv.csv` keeps its inner suffix.
pub fn archive_name(base_name: &str, at: DateTime<Local>) -> String {
    let stem = base_name.strip_suffix(CSV_SUFFIX).unwrap_or(base_name);
    format!("{}-{}{}", stem, file_stamp(at), CSV_SUFFIX)
}
