#![cfg(unix)]

use std::error::Error;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Writes an executable shell script standing in for `inklingreader`.
fn stub_helper(dir: &TempDir, name: &str, body: &str) -> Result<PathBuf, Box<dyn Error>> {
    let path = dir.path().join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

fn adapter(helper: &Path) -> Result<Command, Box<dyn Error>> {
    let mut cmd = Command::cargo_bin("wpi2svg-ext")?;
    cmd.env("INKLINGREADER", helper).env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn successful_helper_exits_zero_with_clean_stderr() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "printf '<svg/>'")?;

    adapter(&helper)?
        .args(["--tab=\"default_tab\"", "pen.wpi"])
        .assert()
        .success()
        .stdout("<svg/>")
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn failing_helper_reports_stderr_and_exits_one() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "echo boom >&2\nexit 1")?;

    adapter(&helper)?
        .arg("pen.wpi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed:"))
        .stderr(predicate::str::contains("boom"));

    Ok(())
}

#[test]
fn default_tab_passes_only_file_and_direct_output() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "printf '%s\\n' \"$@\"")?;

    adapter(&helper)?
        .args([
            "--tab=\"default_tab\"",
            "--dimensions=A4",
            "--pressure_factor=2.0",
            "/data/my pen.wpi",
        ])
        .assert()
        .success()
        .stdout("--file\n/data/my pen.wpi\n--direct-output\n");

    Ok(())
}

#[test]
fn custom_tab_forwards_resolved_flags() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "printf '%s\\n' \"$@\"")?;

    adapter(&helper)?
        .args([
            "--tab=\"custom_import_tab\"",
            "--dimensions=A4",
            "--dimensions_orientation=landscape",
            "--background=custom",
            "--background_color=#123456",
            "--foreground=inkling",
            "--pressure_factor=0.5",
            "--verbose=false",
            "pen.wpi",
        ])
        .assert()
        .success()
        .stdout(
            "--file\npen.wpi\n--direct-output\n\
             --dimensions=297x210mm\n\
             --background=#123456\n\
             --colors=#000000,#ff0000,#0000ff,#00ff00\n\
             --pressure-factor=0.50\n",
        )
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn unknown_paper_size_and_presets_are_omitted() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "printf '%s\\n' \"$@\"")?;

    adapter(&helper)?
        .args([
            "--tab=custom_import_tab",
            "--dimensions=Napkin",
            "--background=plaid",
            "--foreground=default",
            "--some_future_option=1",
            "pen.wpi",
        ])
        .assert()
        .success()
        .stdout("--file\npen.wpi\n--direct-output\n")
        .stderr(predicate::str::is_empty());

    Ok(())
}

#[test]
fn verbose_mode_logs_the_command_line() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "exit 0")?;

    adapter(&helper)?
        .args(["--tab=custom_import_tab", "--verbose=true", "pen.wpi"])
        .assert()
        .success()
        .stderr(predicate::str::contains("--direct-output --dimensions=\"210x297mm\""));

    Ok(())
}

#[test]
fn missing_helper_is_an_invocation_failure() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let missing = dir.path().join("no-such-helper");

    adapter(&missing)?
        .arg("pen.wpi")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error attempting to run"));

    Ok(())
}

#[test]
fn missing_input_file_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let helper = stub_helper(&dir, "inklingreader", "exit 0")?;

    adapter(&helper)?
        .arg("--tab=default_tab")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no input file given"));

    Ok(())
}
