// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    ward()
        .arg("init")
        .arg("--prefix")
        .arg("city")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized ward"))
        .stdout(predicate::str::contains("Prefix: city"));

    assert!(temp.path().join(".ward").exists());
    assert!(temp.path().join(".ward/config.toml").exists());
    assert!(temp.path().join(".ward/ward.db").exists());
    assert!(temp.path().join(".ward/.gitignore").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();
    ward_in(&temp, &["init", "--prefix", "city"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[parameterized(
    single_char = { "a" },
    uppercase = { "City" },
    digits_only = { "123" },
    punctuation = { "ci-ty" },
)]
fn rejects_invalid_prefix(prefix: &str) {
    let temp = TempDir::new().unwrap();
    ward_in(&temp, &["init", "--prefix", prefix])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid prefix"));
    assert!(!temp.path().join(".ward").exists());
}

#[test]
fn workspace_must_exist() {
    let temp = TempDir::new().unwrap();
    ward_in(&temp, &["init", "--prefix", "city", "--workspace", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("workspace not found"));
}

#[test]
fn workspace_holds_database() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("shared")).unwrap();
    ward_in(&temp, &["init", "--prefix", "city", "--workspace", "shared"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workspace: shared"));

    create_issue(&temp, "Pothole");
    assert!(temp.path().join("shared/ward.db").exists());
    assert!(!temp.path().join(".ward/ward.db").exists());
}

#[test]
fn commands_fail_before_init() {
    let temp = TempDir::new().unwrap();
    ward_in(&temp, &["list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn directory_flag_targets_other_project() {
    let temp = init_temp();
    let other = TempDir::new().unwrap();
    create_issue(&temp, "Pothole");

    ward()
        .arg("-C")
        .arg(temp.path())
        .arg("list")
        .current_dir(other.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pothole"));
}

#[test]
fn subdirectories_find_the_project() {
    let temp = init_temp();
    create_issue(&temp, "Pothole");
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    ward()
        .arg("list")
        .current_dir(&nested)
        .assert()
        .success()
        .stdout(predicate::str::contains("Pothole"));
}
