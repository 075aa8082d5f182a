// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn ward() -> Command {
    let mut cmd = cargo_bin_cmd!("ward");
    cmd.env_remove("WARD_LOG").env("NO_COLOR", "1");
    cmd
}

/// Run `ward` in `temp` with the given arguments.
pub fn ward_in(temp: &TempDir, args: &[&str]) -> Command {
    let mut cmd = ward();
    cmd.args(args).current_dir(temp.path());
    cmd
}

/// Helper to create an initialized temp directory with prefix `city`.
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    ward()
        .arg("init")
        .arg("--prefix")
        .arg("city")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Helper to create an issue and return its ID.
pub fn create_issue(temp: &TempDir, title: &str) -> String {
    create_issue_with(temp, title, &[])
}

/// Create an issue with extra `ward new` flags and return its ID.
pub fn create_issue_with(temp: &TempDir, title: &str, flags: &[&str]) -> String {
    let mut args = vec!["new", title, "-o", "id"];
    args.extend_from_slice(flags);
    let output = ward_in(temp, &args).output().unwrap();
    assert!(
        output.status.success(),
        "ward new failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Stdout of a successful command.
pub fn stdout_of(temp: &TempDir, args: &[&str]) -> String {
    let output = ward_in(temp, args).assert().success().get_output().stdout.clone();
    String::from_utf8_lossy(&output).to_string()
}

/// Parse the JSON stdout of a successful command.
pub fn json_of(temp: &TempDir, args: &[&str]) -> serde_json::Value {
    serde_json::from_str(&stdout_of(temp, args)).unwrap()
}
