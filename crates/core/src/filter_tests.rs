// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn issue(status: Status, priority: Priority, category: &str) -> Issue {
    let mut issue = Issue::new(
        "city-1".into(),
        "Deep pothole".into(),
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap(),
    );
    issue.status = status;
    issue.priority = priority;
    issue.category = category.into();
    issue.address = "Main St 4, Downtown".into();
    issue
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn parse_groups_empty_is_none() {
    let groups: Groups<Status> = parse_groups(&[], |s| s.parse()).unwrap();
    assert!(groups.is_none());
}

#[test]
fn parse_groups_splits_commas_and_skips_blanks() {
    let groups: Groups<Status> =
        parse_groups(&strings(&["open, in_progress,", "resolved"]), |s| s.parse()).unwrap();
    assert_eq!(
        groups,
        Some(vec![
            vec![Status::Open, Status::InProgress],
            vec![Status::Resolved]
        ])
    );
}

#[test]
fn parse_groups_propagates_parse_error() {
    let result: Result<Groups<Status>> = parse_groups(&strings(&["open,bogus"]), |s| s.parse());
    assert!(matches!(result, Err(Error::InvalidStatus(_))));
}

#[parameterized(
    or_within_group = { &["open,resolved"], Status::Open, true },
    or_within_group_miss = { &["open,resolved"], Status::InProgress, false },
    and_across_groups = { &["open", "open,resolved"], Status::Open, true },
    and_across_groups_miss = { &["open", "resolved"], Status::Open, false },
)]
fn matches_groups_semantics(values: &[&str], status: Status, expected: bool) {
    let groups: Groups<Status> = parse_groups(&strings(values), |s| s.parse()).unwrap();
    assert_eq!(matches_groups(&groups, &status), expected);
}

#[test]
fn default_filter_matches_everything() {
    let filter = IssueFilter::default();
    assert!(filter.matches(&issue(Status::Resolved, Priority::Low, "other")));
}

#[test]
fn category_filter_is_case_insensitive() {
    let filter = IssueFilter::default()
        .with_categories(&strings(&["Roads,Pothole"]))
        .unwrap();
    assert!(filter.matches(&issue(Status::Open, Priority::High, "pothole")));
    assert!(!filter.matches(&issue(Status::Open, Priority::High, "garbage")));
}

#[test]
fn department_filter_requires_assignment() {
    let filter = IssueFilter::default()
        .with_departments(&strings(&["roads"]))
        .unwrap();
    let mut i = issue(Status::Open, Priority::Medium, "pothole");
    assert!(!filter.matches(&i));
    i.department = Some("Roads".into());
    assert!(filter.matches(&i));
}

#[test]
fn unassigned_filter_rejects_assigned() {
    let filter = IssueFilter {
        unassigned: true,
        ..IssueFilter::default()
    };
    let mut i = issue(Status::Open, Priority::Medium, "pothole");
    assert!(filter.matches(&i));
    i.department = Some("Roads".into());
    assert!(!filter.matches(&i));
}

#[parameterized(
    title = { "POTHOLE", true },
    address = { "downtown", true },
    id = { "city-1", true },
    miss = { "streetlight", false },
)]
fn search_covers_text_fields(needle: &str, expected: bool) {
    let filter = IssueFilter::default().with_search(Some(needle));
    assert_eq!(
        filter.matches(&issue(Status::Open, Priority::Medium, "roads")),
        expected
    );
}

#[test]
fn blank_search_is_ignored() {
    let filter = IssueFilter::default().with_search(Some("   "));
    assert!(filter.search.is_none());
}

#[test]
fn time_bounds_are_half_open() {
    let i = issue(Status::Open, Priority::Medium, "roads");
    let at = i.created_at;
    let since = IssueFilter {
        since: Some(at),
        ..IssueFilter::default()
    };
    let until = IssueFilter {
        until: Some(at),
        ..IssueFilter::default()
    };
    assert!(since.matches(&i));
    assert!(!until.matches(&i));
}

#[test]
fn apply_keeps_matching_issues() {
    let filter = IssueFilter::default()
        .with_priorities(&strings(&["high,critical"]))
        .unwrap();
    let issues = vec![
        issue(Status::Open, Priority::Low, "a"),
        issue(Status::Open, Priority::Critical, "b"),
        issue(Status::Open, Priority::High, "c"),
    ];
    let kept = filter.apply(issues);
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|i| i.priority >= Priority::High));
}

#[test]
fn parse_condition_empty_matches_all() {
    let filter = IssueFilter::parse_condition("").unwrap();
    assert_eq!(filter, IssueFilter::default());
}

#[test]
fn parse_condition_all_flags() {
    let filter = IssueFilter::parse_condition(
        "-s open,in_progress -p critical -c Pothole -d roads -k \"deep hole\" --near 'Main St' --unassigned",
    )
    .unwrap();
    assert_eq!(
        filter.statuses,
        Some(vec![vec![Status::Open, Status::InProgress]])
    );
    assert_eq!(filter.priorities, Some(vec![vec![Priority::Critical]]));
    assert_eq!(filter.categories, Some(vec![vec!["pothole".to_string()]]));
    assert_eq!(filter.departments, Some(vec![vec!["roads".to_string()]]));
    assert_eq!(filter.keyword.as_deref(), Some("deep hole"));
    assert!(filter.search.is_none());
    assert_eq!(filter.near.as_deref(), Some("main st"));
    assert!(filter.unassigned);
}

#[test]
fn parse_condition_repeated_flags_are_anded() {
    let filter = IssueFilter::parse_condition("-p high,critical -p critical").unwrap();
    assert!(filter.matches(&issue(Status::Open, Priority::Critical, "x")));
    assert!(!filter.matches(&issue(Status::Open, Priority::High, "x")));
}

#[parameterized(
    in_title = { "Hole on Main", None, "12 Elm St", true },
    in_description = { "Road damage", Some("a deep HOLE"), "12 Elm St", true },
    only_in_address = { "Road damage", None, "1 Hole Lane", false },
    only_in_id = { "Road damage", None, "12 Elm St", false },
)]
fn parse_condition_keyword_covers_title_and_description(
    title: &str,
    description: Option<&str>,
    address: &str,
    expected: bool,
) {
    let filter = IssueFilter::parse_condition("-k hole").unwrap();
    let mut i = issue(Status::Open, Priority::Medium, "roads");
    i.id = "hole-1".into();
    i.title = title.into();
    i.description = description.map(str::to_string);
    i.address = address.into();
    assert_eq!(filter.matches(&i), expected);
}

#[parameterized(
    unknown_flag = { "-x foo" },
    missing_value = { "-s" },
    missing_keyword = { "-k" },
    bad_status = { "-s closed" },
)]
fn parse_condition_rejects(input: &str) {
    assert!(IssueFilter::parse_condition(input).is_err());
}

#[test]
fn tokenize_respects_quotes() {
    assert_eq!(
        tokenize("-k 'water leak' -c \"x y\"  -s open"),
        strings(&["-k", "water leak", "-c", "x y", "-s", "open"])
    );
}

#[parameterized(
    minutes = { "30m", Duration::minutes(30) },
    hours = { "12h", Duration::hours(12) },
    days = { "3d", Duration::days(3) },
    weeks = { "2w", Duration::weeks(2) },
    months = { "1M", Duration::days(30) },
    years = { "1y", Duration::days(365) },
)]
fn parse_duration_units(input: &str, expected: Duration) {
    assert_eq!(parse_duration(input).unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    no_number = { "d" },
    negative = { "-3d" },
    no_unit = { "5" },
    bad_unit = { "5x" },
    too_many_days = { "200000000000d" },
    too_many_years = { "9999999999999y" },
    too_many_weeks = { "99999999999999w" },
)]
fn parse_duration_rejects(input: &str) {
    assert!(parse_duration(input).is_err());
}

#[test]
fn parse_time_bound_accepts_date_and_duration() {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    assert_eq!(
        parse_time_bound("2026-03-01", now).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        parse_time_bound("2d", now).unwrap(),
        Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap()
    );
}

#[parameterized(
    days = { "99999999d" },
    hours = { "9999999999999h" },
)]
fn parse_time_bound_out_of_range_is_an_error(input: &str) {
    let now = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
    let err = parse_time_bound(input, now).unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
    assert!(err.to_string().contains("hint:"));
}
