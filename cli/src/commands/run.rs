use std::env;
use std::path::PathBuf;

use anyhow::Context;
use colored::*;

use crate::terminal::{colors, print};
use archivr_common::config::Config;
use archivr_core::archiver::{self, ArchivedFile, RunReport};

pub fn run(
    dir: Option<PathBuf>,
    archive_dir: Option<PathBuf>,
    log: Option<PathBuf>,
    quiet: u8,
) -> anyhow::Result<()> {
    let work_dir = match dir {
        Some(dir) => dir,
        None => env::current_dir().context("cannot determine the current directory")?,
    };

    let mut cfg = Config::new(work_dir);
    if let Some(archive_dir) = archive_dir {
        cfg.archive_dir = archive_dir;
    }
    if let Some(log) = log {
        cfg.log_file = log;
    }
    cfg.quiet = quiet;

    let report = archiver::run(&cfg, Some(&report_archived))?;

    run_ends(&report, &cfg);
    Ok(())
}

// Contractual stdout line; printed at every quiet level.
fn report_archived(file: &ArchivedFile) {
    println!(
        "Archived {} -> {}",
        file.base_name.color(colors::PRIMARY),
        file.destination.display().to_string().color(colors::ACCENT)
    );
}

fn run_ends(report: &RunReport, cfg: &Config) {
    if report.found_nothing() {
        no_files_found(cfg);
        return;
    }
    print_summary(report, cfg);
}

fn no_files_found(cfg: &Config) {
    print::header("nothing to archive", cfg.quiet);
    println!("No CSV files found.");
}

fn print_summary(report: &RunReport, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let archived = format!("{} archived", report.archived.len()).bold().green();
    let line = if report.failed.is_empty() {
        format!("Run complete: {archived}")
    } else {
        let failed = format!("{} failed", report.failed.len()).bold().red();
        format!("Run complete: {archived}, {failed}")
    };

    print::fat_separator(cfg.quiet);
    print::centerln(&line);
}
