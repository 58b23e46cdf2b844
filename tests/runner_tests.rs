use std::fs;
use std::path::Path;

use assert_fs::TempDir;
use predicates::prelude::*;

use varsweep::settings::StaticSettings;
use varsweep::sweep::{BACKUP_DIR_NAME, Sweep, SweepStats};

mod common;
use common::{entry_count, write_sized_file};

fn run_sweep(var_root: &Path, settings: StaticSettings) -> SweepStats {
    Sweep::builder()
        .var_root(var_root)
        .settings(settings)
        .quiet(true)
        .build()
        .unwrap()
        .execute()
}

#[test]
fn test_disabled_policy_touches_nothing() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/app.log"), 64);

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: false,
            folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    assert!(predicate::path::exists().eval(&var_root.join("log/app.log")));
    assert_eq!(stats.directories_scanned, 0);
    assert_eq!(stats.directories_purged, 0);
}

#[test]
fn test_allow_listed_directories_are_purged() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/app.log"), 64);
    write_sized_file(&var_root.join("cache/page.html"), 64);
    write_sized_file(&var_root.join("report/summary.csv"), 64);

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: true,
            size_check_enabled: false,
            folder_list_json: Some(r#"[{"folders":"log"},{"folders":"cache"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    assert_eq!(entry_count(&var_root.join("log")), 0);
    assert_eq!(entry_count(&var_root.join("cache")), 0);
    assert!(predicate::path::exists().eval(&var_root.join("report/summary.csv")));

    assert_eq!(stats.directories_scanned, 3);
    assert_eq!(stats.directories_purged, 2);
    assert_eq!(stats.purge_failures, 0);
}

#[test]
fn test_size_threshold_selects_only_oversized_directories() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/big.log"), 2000);
    write_sized_file(&var_root.join("cache/small.html"), 500);

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: true,
            size_check_enabled: true,
            capacity: "1000B".to_string(),
            folder_list_json: Some(r#"[{"folders":"log"},{"folders":"cache"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    assert_eq!(entry_count(&var_root.join("log")), 0);
    assert!(predicate::path::exists().eval(&var_root.join("cache/small.html")));

    assert_eq!(stats.directories_purged, 1);
    assert_eq!(stats.bytes_reclaimed, 2000);
}

#[test]
fn test_unparseable_capacity_means_no_threshold() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/tiny.log"), 1);

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: true,
            size_check_enabled: true,
            capacity: "a few gigs".to_string(),
            folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    // Threshold 0 makes every allow-listed directory eligible
    assert_eq!(entry_count(&var_root.join("log")), 0);
    assert_eq!(stats.directories_purged, 1);
}

#[test]
fn test_empty_allow_list_is_a_noop() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/big.log"), 2000);

    for folder_list in [None, Some("[]".to_string()), Some("not json".to_string())] {
        let stats = run_sweep(
            &var_root,
            StaticSettings {
                enabled: true,
                size_check_enabled: true,
                capacity: "1000B".to_string(),
                folder_list_json: folder_list,
                ..StaticSettings::default()
            },
        );

        assert!(predicate::path::exists().eval(&var_root.join("log/big.log")));
        assert_eq!(stats.directories_scanned, 1);
        assert_eq!(stats.directories_purged, 0);
    }
}

#[test]
fn test_backup_enabled_archives_before_purging() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/app.log"), 64);
    write_sized_file(&var_root.join("cache/page.html"), 64);

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: true,
            backup_enabled: true,
            folder_list_json: Some(r#"[{"folders":"log"},{"folders":"cache"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    assert_eq!(stats.directories_purged, 2);
    assert_eq!(entry_count(&var_root.join("log")), 0);

    let backup_dir = var_root.join(BACKUP_DIR_NAME);
    let archives: Vec<String> = fs::read_dir(&backup_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(archives.len(), 2);
    assert!(archives.iter().all(|name| name.ends_with(".tar.gz")));
}

#[test]
fn test_backup_failure_is_isolated_per_directory() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/app.log"), 64);
    write_sized_file(&var_root.join("cache/page.html"), 64);

    // A regular file squatting on the backup directory path makes every
    // archive attempt fail, so every purge aborts before deleting
    fs::write(var_root.join(BACKUP_DIR_NAME), "in the way").unwrap();

    let stats = run_sweep(
        &var_root,
        StaticSettings {
            enabled: true,
            backup_enabled: true,
            folder_list_json: Some(r#"[{"folders":"log"},{"folders":"cache"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    // Both directories were attempted: the first failure did not stop the
    // loop, and neither directory lost any contents
    assert_eq!(stats.purge_failures, 2);
    assert_eq!(stats.directories_purged, 0);
    assert!(predicate::path::exists().eval(&var_root.join("log/app.log")));
    assert!(predicate::path::exists().eval(&var_root.join("cache/page.html")));
}

#[test]
fn test_dry_run_reports_without_deleting() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    write_sized_file(&var_root.join("log/app.log"), 64);

    let stats = Sweep::builder()
        .var_root(&var_root)
        .settings(StaticSettings {
            enabled: true,
            folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
            ..StaticSettings::default()
        })
        .dry_run(true)
        .quiet(true)
        .build()
        .unwrap()
        .execute();

    assert!(predicate::path::exists().eval(&var_root.join("log/app.log")));
    assert_eq!(stats.directories_purged, 1);
}

#[test]
fn test_missing_var_root_is_nothing_to_clean() {
    let temp = TempDir::new().unwrap();

    let stats = run_sweep(
        &temp.path().join("no-such-var"),
        StaticSettings {
            enabled: true,
            folder_list_json: Some(r#"[{"folders":"log"}]"#.to_string()),
            ..StaticSettings::default()
        },
    );

    assert_eq!(stats.directories_scanned, 0);
    assert_eq!(stats.directories_purged, 0);
    assert_eq!(stats.purge_failures, 0);
}
