use std::fs;
use std::path::Path;

use archivr_common::config::Config;
use archivr_common::error::{ArchiveError, FileFailure};
use archivr_core::{archiver, naming};
use chrono::Local;

fn config_for(dir: &Path) -> Config {
    Config::new(dir.to_path_buf())
}

#[test]
fn archives_csv_and_leaves_everything_else() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "id,name\n1,foo\n").unwrap();
    fs::write(dir.path().join("b.txt"), "not a csv").unwrap();
    fs::create_dir(dir.path().join("c.csv")).unwrap();

    let report = archiver::run(&config_for(dir.path()), None).unwrap();

    assert_eq!(1, report.archived.len());
    assert!(report.failed.is_empty());
    assert_eq!("a.csv", report.archived[0].base_name);
    assert!(!dir.path().join("a.csv").exists());
    assert!(dir.path().join("b.txt").exists());
    assert!(dir.path().join("c.csv").is_dir());
    assert!(report.archived[0].destination.exists());
}

#[test]
fn destination_name_carries_the_compact_stamp() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("grades.csv"), "x\n").unwrap();

    let before = Local::now();
    let report = archiver::run(&config_for(dir.path()), None).unwrap();
    let after = Local::now();

    let new_name = &report.archived[0].new_name;
    let expected = [
        naming::archive_name("grades.csv", before),
        naming::archive_name("grades.csv", after),
    ];
    assert!(
        expected.contains(new_name),
        "unexpected name: {new_name}, wanted one of {expected:?}"
    );
}

#[test]
fn log_record_precedes_move_and_captures_content() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.csv"), "id,name\n1,foo\n").unwrap();

    let cfg = config_for(dir.path());
    let report = archiver::run(&cfg, None).unwrap();
    let archived = &report.archived[0];

    let log = fs::read_to_string(&cfg.log_file).unwrap();
    assert!(log.starts_with('['));
    assert!(log.contains(&format!(
        "] {} -> {}\n",
        archived.base_name, archived.new_name
    )));
    // Body is the pre-move bytes, framed by one blank line.
    assert!(log.ends_with("id,name\n1,foo\n\n"));

    // Header timestamp is full date-time with offset, unlike the filename stamp.
    let first_line = log.lines().next().unwrap();
    let stamp = &first_line[1..first_line.find(']').unwrap()];
    chrono::DateTime::parse_from_str(stamp, "%Y-%m-%dT%H:%M:%S%:z").unwrap();

    // Destination holds the same bytes, unchanged.
    assert_eq!(
        "id,name\n1,foo\n",
        fs::read_to_string(&archived.destination).unwrap()
    );
}

#[test]
fn empty_directory_reports_nothing_found_and_touches_no_log() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(dir.path());

    let report = archiver::run(&cfg, None).unwrap();

    assert!(report.found_nothing());
    assert!(cfg.archive_dir.is_dir());
    assert_eq!(0, fs::read_dir(&cfg.archive_dir).unwrap().count());
    assert!(!cfg.log_file.exists());
}

#[test]
fn repeat_runs_append_independent_record_groups() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_for(dir.path());

    fs::write(dir.path().join("first.csv"), "one\n").unwrap();
    archiver::run(&cfg, None).unwrap();
    let after_first = fs::read_to_string(&cfg.log_file).unwrap();

    fs::write(dir.path().join("second.csv"), "two\n").unwrap();
    archiver::run(&cfg, None).unwrap();
    let after_second = fs::read_to_string(&cfg.log_file).unwrap();

    // Earlier records are untouched; the new group is appended after them.
    assert!(after_second.starts_with(&after_first));
    assert!(after_second.contains("first.csv"));
    assert!(after_second.contains("second.csv"));
    assert_eq!(2, fs::read_dir(&cfg.archive_dir).unwrap().count());
}

#[test]
fn candidates_are_processed_in_base_name_order() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("zeta.csv"), "z\n").unwrap();
    fs::write(dir.path().join("alpha.csv"), "a\n").unwrap();
    fs::write(dir.path().join("mid.csv"), "m\n").unwrap();

    let report = archiver::run(&config_for(dir.path()), None).unwrap();

    let names: Vec<&str> = report
        .archived
        .iter()
        .map(|f| f.base_name.as_str())
        .collect();
    assert_eq!(vec!["alpha.csv", "mid.csv", "zeta.csv"], names);
}

#[test]
fn callback_fires_for_each_archived_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "a\n").unwrap();
    fs::write(dir.path().join("b.csv"), "b\n").unwrap();

    let seen = std::cell::RefCell::new(Vec::new());
    let record = |file: &archiver::ArchivedFile| seen.borrow_mut().push(file.base_name.clone());
    let report = archiver::run(&config_for(dir.path()), Some(&record)).unwrap();

    assert_eq!(seen.into_inner(), vec!["a.csv", "b.csv"]);
    assert_eq!(2, report.archived.len());
}

#[cfg(unix)]
#[test]
fn unreadable_candidate_is_skipped_and_the_rest_are_archived() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("locked.csv"), "secret\n").unwrap();
    fs::write(dir.path().join("open.csv"), "ok\n").unwrap();
    fs::set_permissions(
        dir.path().join("locked.csv"),
        fs::Permissions::from_mode(0o000),
    )
    .unwrap();
    if fs::read(dir.path().join("locked.csv")).is_ok() {
        // Privileged users bypass file modes; nothing to exercise.
        return;
    }

    let cfg = config_for(dir.path());
    let report = archiver::run(&cfg, None).unwrap();

    // locked.csv sorts first, so the run demonstrably continued past it.
    assert_eq!(1, report.archived.len());
    assert_eq!("open.csv", report.archived[0].base_name);
    assert_eq!(1, report.failed.len());
    assert!(matches!(report.failed[0], FileFailure::Unreadable { .. }));
    assert!(!report.found_nothing());

    // The skipped file stays put and never reached the log.
    assert!(dir.path().join("locked.csv").exists());
    let log = fs::read_to_string(&cfg.log_file).unwrap();
    assert!(!log.contains("locked.csv"));
    assert!(log.contains("open.csv"));
}

#[cfg(unix)]
#[test]
fn failed_move_keeps_the_orphaned_log_record() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("stuck.csv"), "payload\n").unwrap();

    let cfg = config_for(dir.path());
    fs::create_dir(&cfg.archive_dir).unwrap();
    fs::set_permissions(&cfg.archive_dir, fs::Permissions::from_mode(0o555)).unwrap();
    if fs::write(cfg.archive_dir.join("probe.tmp"), "x").is_ok() {
        // Privileged users bypass file modes; nothing to exercise.
        return;
    }

    let report = archiver::run(&cfg, None).unwrap();

    assert!(report.archived.is_empty());
    assert_eq!(1, report.failed.len());
    assert!(matches!(report.failed[0], FileFailure::Move { .. }));
    // A failed candidate still counts as found.
    assert!(!report.found_nothing());

    // The record written before the failed move survives, and the source
    // never left the working directory.
    let log = fs::read_to_string(&cfg.log_file).unwrap();
    assert!(log.contains("] stuck.csv -> "));
    assert!(log.ends_with("payload\n\n"));
    assert!(dir.path().join("stuck.csv").exists());

    fs::set_permissions(&cfg.archive_dir, fs::Permissions::from_mode(0o755)).unwrap();
}

#[test]
fn archive_dir_colliding_with_a_file_is_fatal_before_any_move() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("archive"), "not a directory").unwrap();
    fs::write(dir.path().join("a.csv"), "x\n").unwrap();

    let err = archiver::run(&config_for(dir.path()), None).unwrap_err();

    assert!(matches!(err, ArchiveError::CreateArchiveDir { .. }));
    assert!(dir.path().join("a.csv").exists());
}

#[test]
fn log_append_failure_is_fatal_and_blocks_the_move() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "x\n").unwrap();

    let mut cfg = config_for(dir.path());
    // A directory at the log path makes every append fail.
    cfg.log_file = dir.path().join("logdir");
    fs::create_dir(&cfg.log_file).unwrap();

    let err = archiver::run(&cfg, None).unwrap_err();

    assert!(matches!(err, ArchiveError::LogAppend { .. }));
    assert!(dir.path().join("a.csv").exists());
    assert_eq!(0, fs::read_dir(&cfg.archive_dir).unwrap().count());
}

#[test]
fn overridden_archive_dir_and_log_are_honored() {
    let dir = tempfile::tempdir().unwrap();
    let elsewhere = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.csv"), "x\n").unwrap();

    let mut cfg = config_for(dir.path());
    cfg.archive_dir = elsewhere.path().join("vault");
    cfg.log_file = elsewhere.path().join("moves.log");

    let report = archiver::run(&cfg, None).unwrap();

    assert!(report.archived[0].destination.starts_with(elsewhere.path()));
    assert!(cfg.log_file.exists());
    assert!(!dir.path().join("organizer.log").exists());
}
