// darkstrip/tests/cli_integration_tests.rs
//! CLI integration tests for the `darkstrip` binary.
//!
//! Each test writes fixture files into a temporary directory, runs the binary
//! against them with `assert_cmd`, and checks both stdout and the rewritten
//! files. stdout is not a terminal here, so the report carries no colour codes.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn darkstrip() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("darkstrip"));
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("DARKSTRIP_CONFIG");
    cmd
}

fn write_fixture(dir: &Path, name: &str, content: &str) -> Result<std::path::PathBuf> {
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}

#[test]
fn test_strips_listed_files_and_reports_totals() -> Result<()> {
    let dir = tempdir()?;
    let card = write_fixture(
        dir.path(),
        "StatCard.tsx",
        r#"<div className="bg-white dark:bg-zinc-900 ring-1 dark:ring-white/10">"#,
    )?;
    let layout = write_fixture(
        dir.path(),
        "auth-layout.tsx",
        "<main className=\"flex dark:lg:bg-zinc-900\">\n<div dark:hidden dark:text-white>content</div>\n</main>\n",
    )?;

    darkstrip()
        .arg(&card)
        .arg(&layout)
        .assert()
        .success()
        .stdout(
            "[OK] StatCard.tsx: 36 characters removed\n\
             [OK] auth-layout.tsx: 48 characters removed\n\
             \n\
             [DONE] Total 84 characters removed!\n",
        );

    assert_eq!(
        fs::read_to_string(&card)?,
        r#"<div className="bg-white ring-1">"#
    );
    assert_eq!(
        fs::read_to_string(&layout)?,
        "<main className=\"flex\">\n<div>content</div>\n</main>\n"
    );
    Ok(())
}

#[test]
fn test_missing_file_is_reported_and_batch_continues() -> Result<()> {
    let dir = tempdir()?;
    let missing = dir.path().join("VadeUyarilari.tsx");
    let present = write_fixture(dir.path(), "divider.tsx", "<hr className=\"a dark:b\" />")?;

    darkstrip()
        .arg(&missing)
        .arg(&present)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[ERROR] {}: ", missing.display())))
        .stdout(predicate::str::contains("[OK] divider.tsx: 7 characters removed"))
        .stdout(predicate::str::ends_with("[DONE] Total 7 characters removed!\n"));

    assert!(!missing.exists());
    assert_eq!(fs::read_to_string(&present)?, "<hr className=\"a\" />");
    Ok(())
}

#[test]
fn test_invalid_utf8_file_is_left_untouched() -> Result<()> {
    let dir = tempdir()?;
    let bad = dir.path().join("binary.tsx");
    fs::write(&bad, [b' ', b'd', 0xc3, 0x28])?;

    darkstrip()
        .arg(&bad)
        .assert()
        .success()
        .stdout(predicate::str::contains("[ERROR]"))
        .stdout(predicate::str::contains("valid UTF-8"))
        .stdout(predicate::str::contains("[DONE] Total 0 characters removed!"));

    assert_eq!(fs::read(&bad)?, vec![b' ', b'd', 0xc3, 0x28]);
    Ok(())
}

#[test]
fn test_config_file_supplies_targets_and_marker() -> Result<()> {
    let dir = tempdir()?;
    let page = write_fixture(dir.path(), "Login.tsx", "<h1 className=\"text-lg sm:text-xl dark:text-white\">")?;
    let config_path = dir.path().join("darkstrip.yaml");
    fs::write(
        &config_path,
        format!("marker: \"sm:\"\ntargets:\n  - {:?}\n", page.display().to_string()),
    )?;

    darkstrip()
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Login.tsx: 11 characters removed"));

    assert_eq!(
        fs::read_to_string(&page)?,
        "<h1 className=\"text-lg dark:text-white\">"
    );
    Ok(())
}

#[test]
fn test_marker_flag_overrides_default() -> Result<()> {
    let dir = tempdir()?;
    let file = write_fixture(dir.path(), "combobox.tsx", "a hover:x dark:y")?;

    darkstrip()
        .args(["--marker", "hover:"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] combobox.tsx: 8 characters removed"));

    assert_eq!(fs::read_to_string(&file)?, "a dark:y");
    Ok(())
}

#[test]
fn test_empty_marker_is_a_fatal_error() -> Result<()> {
    let dir = tempdir()?;
    let file = write_fixture(dir.path(), "x.tsx", "a dark:b")?;

    darkstrip()
        .args(["--marker", ""])
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Marker must not be empty"));

    assert_eq!(fs::read_to_string(&file)?, "a dark:b");
    Ok(())
}

#[test]
fn test_debug_logging_goes_to_stderr() -> Result<()> {
    let dir = tempdir()?;
    let file = write_fixture(dir.path(), "y.tsx", "a dark:b")?;

    darkstrip()
        .arg("--debug")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[OK] y.tsx: 7 characters removed"))
        .stderr(predicate::str::contains("Stripping marker 'dark:' from 1 file(s)."));
    Ok(())
}
