// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;
use yare::parameterized;

fn seeded() -> TempDir {
    let temp = init_temp();
    ward_in(&temp, &["dept", "add", "Roads", "-k", "pothole"])
        .assert()
        .success();
    create_issue_with(&temp, "Pothole on Elm", &["-c", "pothole", "-a", "12 Elm St, Downtown"]);
    create_issue_with(&temp, "Leak", &["-c", "water", "-a", "3 River Rd, Northside"]);
    let done = create_issue_with(&temp, "Deep pothole", &["-c", "pothole", "-a", "40 Elm St, Downtown"]);
    ward_in(&temp, &["resolve", &done]).assert().success();
    temp
}

#[test]
fn stats_json_summary() {
    let temp = seeded();
    let stats = json_of(&temp, &["stats", "-o", "json"]);
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["open"], 2);
    assert_eq!(stats["resolved"], 1);
    assert_eq!(stats["resolution_rate"], 33);
    assert_eq!(stats["reported_window"]["current"], 3);
    assert_eq!(stats["reported_window"]["change"], 100);
    assert_eq!(stats["by_department"][0]["key"], "Roads");
    assert_eq!(stats["by_department"][0]["count"], 2);
    assert_eq!(stats["trend"].as_array().unwrap().len(), 7);
}

#[test]
fn stats_areas_and_filters() {
    let temp = seeded();
    let stats = json_of(
        &temp,
        &["stats", "--area", "Downtown", "-c", "pothole", "--trend", "3", "-o", "json"],
    );
    assert_eq!(stats["total"], 2);
    assert_eq!(stats["by_location"][0]["key"], "Downtown");
    assert_eq!(stats["by_location"][0]["count"], 2);
    assert_eq!(stats["trend"].as_array().unwrap().len(), 3);
}

#[test]
fn stats_text_output() {
    let temp = seeded();
    ward_in(&temp, &["stats"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issues: 3 total, 2 open, 0 in progress, 1 resolved"));
}

#[parameterized(
    list = { "list", "ListOutputJson" },
    show = { "show", "IssueDetails" },
    stats = { "stats", "StatsOutputJson" },
)]
fn schema_outputs_json_schema(command: &str, title: &str) {
    let output = ward()
        .args(["schema", command])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let schema: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(schema["title"], title);
    assert!(schema["$schema"].is_string());
}

#[test]
fn completion_generates_script() {
    ward()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ward"));
}

#[test]
fn logging_goes_to_stderr() {
    let temp = init_temp();
    ward_in(&temp, &["new", "Leak", "-o", "id"])
        .env("WARD_LOG", "info")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^city-[0-9a-f]{8}\n$").unwrap())
        .stderr(predicate::str::contains("created issue"));
}

#[parameterized(
    window = { &["stats", "--window", "4000000000"], "hint:" },
    trend = { &["stats", "--trend", "100000000"], "--trend" },
    since = { &["list", "--since", "99999999d"], "time out of range" },
)]
fn oversized_time_arguments_fail_cleanly(args: &[&str], message: &str) {
    let temp = seeded();
    ward_in(&temp, args)
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error: "))
        .stderr(predicate::str::contains(message));
}

#[test]
fn stats_runs_against_another_directory() {
    let temp = seeded();
    let elsewhere = TempDir::new().unwrap();
    let path = temp.path().to_str().unwrap();
    let output = ward()
        .args(["-C", path, "stats", "-o", "json", "--window", "30"])
        .current_dir(elsewhere.path())
        .output()
        .unwrap();
    assert!(output.status.success());
    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["window_days"], 30);
}
