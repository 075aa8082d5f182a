// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 5, 20, 12, 0, 0).unwrap()
}

fn issue(id: &str, days_ago: i64) -> Issue {
    let mut issue = Issue::new(
        id.into(),
        format!("Issue {id}"),
        now() - Duration::days(days_ago),
    );
    issue.category = "roads".into();
    issue
}

fn resolve(mut issue: Issue, days_ago: i64) -> Issue {
    issue.status = Status::Resolved;
    issue.resolved_at = Some(now() - Duration::days(days_ago));
    issue
}

#[parameterized(
    empty = { 0, 0, 0 },
    none = { 0, 10, 0 },
    all = { 5, 5, 100 },
    third = { 1, 3, 33 },
    two_thirds = { 2, 3, 67 },
    half = { 1, 2, 50 },
)]
fn resolution_rate_rounds(resolved: usize, total: usize, expected: u32) {
    assert_eq!(resolution_rate(resolved, total), expected);
}

#[parameterized(
    both_zero = { 0, 0, 0 },
    from_zero = { 4, 0, 100 },
    doubled = { 10, 5, 100 },
    halved = { 5, 10, -50 },
    dropped_to_zero = { 0, 3, -100 },
    unchanged = { 7, 7, 0 },
    rounding = { 4, 3, 33 },
)]
fn percent_change_rules(current: usize, previous: usize, expected: i64) {
    assert_eq!(percent_change(current, previous), expected);
}

#[test]
fn count_by_sorts_by_count_then_key() {
    let counts = count_by(
        ["water", "roads", "parks", "roads", "water"]
            .iter()
            .map(|s| s.to_string()),
    );
    let keys: Vec<_> = counts.iter().map(|c| (c.key.as_str(), c.count)).collect();
    assert_eq!(keys, vec![("roads", 2), ("water", 2), ("parks", 1)]);
}

#[parameterized(
    first_segment = { "Main St 4, Downtown, City", "Main St 4" },
    trimmed = { "  Elm Rd , North", "Elm Rd" },
    no_comma = { "Harbor", "Harbor" },
    blank = { "", "unknown" },
    blank_segment = { " , Somewhere", "unknown" },
)]
fn location_key_takes_first_segment(address: &str, expected: &str) {
    assert_eq!(location_key(address), expected);
}

#[test]
fn areas_count_by_substring_and_may_overlap() {
    let mut a = issue("a", 1);
    a.address = "1 Main St, Downtown".into();
    let mut b = issue("b", 1);
    b.address = "Downtown Northside border".into();
    let mut c = issue("c", 1);
    c.address = "Harbor".into();
    let areas = vec!["Northside".to_string(), "downtown".to_string()];

    let counts = by_location(&[a, b, c], &areas);
    assert_eq!(
        counts,
        vec![
            Count {
                key: "downtown".into(),
                count: 2
            },
            Count {
                key: "Northside".into(),
                count: 1
            },
        ]
    );
}

#[test]
fn trend_covers_days_oldest_first() {
    let issues = vec![
        issue("a", 0),
        issue("b", 0),
        resolve(issue("c", 5), 1),
        issue("d", 2),
        issue("old", 30),
    ];
    let days = trend(&issues, now(), 3);
    assert_eq!(days.len(), 3);
    assert_eq!(days[0].date, now().date_naive() - Duration::days(2));
    assert_eq!((days[0].reported, days[0].resolved), (1, 0));
    assert_eq!((days[1].reported, days[1].resolved), (0, 1));
    assert_eq!((days[2].reported, days[2].resolved), (2, 0));
}

#[test]
fn trend_stops_at_earliest_date() {
    let days = trend(&[], DateTime::<Utc>::MIN_UTC, 3);
    assert_eq!(days.len(), 1);
    assert_eq!(days[0].date, NaiveDate::MIN);
}

#[test]
fn huge_window_counts_everything_as_current() {
    let issues = vec![issue("a", 0), issue("b", 400), resolve(issue("c", 9000), 10)];
    let options = Options {
        window_days: u32::MAX,
        trend_days: 1,
        ..Options::new(now())
    };
    let summary = summarize(&issues, &options);
    assert_eq!(summary.reported_window, Delta::new(3, 0));
    assert_eq!(summary.resolved_window, Delta::new(1, 0));
}

#[test]
fn zero_trend_days_is_empty() {
    assert!(trend(&[issue("a", 0)], now(), 0).is_empty());
}

#[test]
fn average_resolution_hours_ignores_unresolved() {
    let issues = vec![
        resolve(issue("a", 2), 1), // 24h
        resolve(issue("b", 3), 1), // 48h
        issue("c", 1),
    ];
    assert_eq!(average_resolution_hours(&issues), Some(36.0));
    assert_eq!(average_resolution_hours(&[issue("x", 1)]), None);
}

#[test]
fn summarize_counts_and_windows() {
    let mut roads = issue("a", 1);
    roads.department = Some("Roads".into());
    let issues = vec![
        roads,
        issue("b", 2),
        resolve(issue("c", 3), 1),
        resolve(issue("d", 9), 8),
        issue("e", 10),
    ];
    let summary = summarize(&issues, &Options::new(now()));

    assert_eq!(summary.total, 5);
    assert_eq!(summary.open, 3);
    assert_eq!(summary.resolved, 2);
    assert_eq!(summary.resolution_rate, 40);
    // Reported: a, b, c in the last 7 days; d, e in the 7 before.
    assert_eq!(summary.reported_window, Delta::new(3, 2));
    assert_eq!(summary.reported_window.change, 50);
    // Resolved: c this week, d last week.
    assert_eq!(summary.resolved_window.change, 0);
    assert_eq!(summary.by_status[0].key, "open");
    assert_eq!(summary.by_status.len(), 3);
    assert_eq!(summary.by_priority.len(), 4);
    assert_eq!(
        summary.by_department,
        vec![
            Count {
                key: UNASSIGNED_KEY.into(),
                count: 4
            },
            Count {
                key: "Roads".into(),
                count: 1
            },
        ]
    );
    assert_eq!(summary.by_category[0].count, 5);
    assert_eq!(summary.trend.len(), 7);
}

#[test]
fn summarize_empty() {
    let summary = summarize(&[], &Options::new(now()));
    assert_eq!(summary.total, 0);
    assert_eq!(summary.resolution_rate, 0);
    assert_eq!(summary.reported_window.change, 0);
    assert!(summary.avg_resolution_hours.is_none());
    assert!(summary.by_location.is_empty());
}
