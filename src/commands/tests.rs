use std::fs;

use tempfile::TempDir;

use super::execute;
use crate::cli::{Cli, Commands};

fn write_settings(dir: &TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("varsweep.toml");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn test_execute_run_with_missing_settings_is_noop() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    fs::create_dir_all(var_root.join("log")).unwrap();
    fs::write(var_root.join("log/app.log"), "entry").unwrap();

    let cli = Cli::builder()
        .var_root(&var_root)
        .quiet(true)
        .command(Commands::Run { dry_run: false })
        .build()
        .unwrap();

    execute(&cli).unwrap();

    // No settings file means the module is disabled and nothing is touched
    assert!(var_root.join("log/app.log").exists());
}

#[test]
fn test_execute_run_purges_configured_folder() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    fs::create_dir_all(var_root.join("log")).unwrap();
    fs::create_dir_all(var_root.join("cache")).unwrap();
    fs::write(var_root.join("log/app.log"), "entry").unwrap();
    fs::write(var_root.join("cache/page.html"), "cached").unwrap();

    let config = write_settings(
        &temp,
        r#"
        [general]
        enable = true

        [folders]
        list = '[{"folders":"log"}]'
        "#,
    );

    let cli = Cli::builder()
        .var_root(&var_root)
        .config(&config)
        .quiet(true)
        .command(Commands::Run { dry_run: false })
        .build()
        .unwrap();

    execute(&cli).unwrap();

    assert!(!var_root.join("log/app.log").exists());
    assert!(var_root.join("log").exists());
    assert!(var_root.join("cache/page.html").exists());
}

#[test]
fn test_execute_run_dry_run_deletes_nothing() {
    let temp = TempDir::new().unwrap();
    let var_root = temp.path().join("var");
    fs::create_dir_all(var_root.join("log")).unwrap();
    fs::write(var_root.join("log/app.log"), "entry").unwrap();

    let config = write_settings(
        &temp,
        r#"
        [general]
        enable = true

        [folders]
        list = '[{"folders":"log"}]'
        "#,
    );

    let cli = Cli::builder()
        .var_root(&var_root)
        .config(&config)
        .quiet(true)
        .command(Commands::Run { dry_run: true })
        .build()
        .unwrap();

    execute(&cli).unwrap();

    assert!(var_root.join("log/app.log").exists());
}

#[test]
fn test_execute_list_on_missing_root() {
    let temp = TempDir::new().unwrap();

    let cli = Cli::builder()
        .var_root(temp.path().join("does-not-exist"))
        .quiet(true)
        .command(Commands::List { sizes: true })
        .build()
        .unwrap();

    // A missing var root is "nothing to clean", not an error
    execute(&cli).unwrap();
}
