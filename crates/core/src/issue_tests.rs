// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    open = { "open", Status::Open },
    in_progress = { "in_progress", Status::InProgress },
    in_progress_dash = { "in-progress", Status::InProgress },
    in_progress_space = { "In Progress", Status::InProgress },
    resolved = { "RESOLVED", Status::Resolved },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "closed" },
    empty = { "" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(matches!(
        input.parse::<Status>(),
        Err(Error::InvalidStatus(_))
    ));
}

#[test]
fn status_transitions_are_lenient_but_not_reflexive() {
    for from in Status::ALL {
        for to in Status::ALL {
            assert_eq!(from.can_transition_to(to), from != to);
        }
    }
}

#[test]
fn only_resolved_is_inactive() {
    assert!(Status::Open.is_active());
    assert!(Status::InProgress.is_active());
    assert!(!Status::Resolved.is_active());
}

#[parameterized(
    low = { "low", Priority::Low },
    medium = { "Medium", Priority::Medium },
    med = { "med", Priority::Medium },
    high = { "HIGH", Priority::High },
    critical = { "critical", Priority::Critical },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test]
fn priority_orders_by_urgency() {
    assert!(Priority::Critical > Priority::High);
    assert!(Priority::High > Priority::Medium);
    assert!(Priority::Medium > Priority::Low);
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn action_roundtrips_through_str() {
    for action in [
        Action::Created,
        Action::Edited,
        Action::StatusChanged,
        Action::Resolved,
        Action::Reopened,
        Action::Prioritized,
        Action::Assigned,
        Action::Unassigned,
        Action::Noted,
    ] {
        assert_eq!(action.as_str().parse::<Action>().unwrap(), action);
    }
}

#[test]
fn new_issue_defaults() {
    let now = Utc::now();
    let issue = Issue::new("city-1".into(), "Broken light".into(), now);
    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.category, DEFAULT_CATEGORY);
    assert_eq!(issue.updated_at, now);
    assert!(issue.department.is_none());
    assert!(issue.coordinates().is_none());
}

#[test]
fn matcher_text_joins_title_description_and_category() {
    let mut issue = Issue::new("city-1".into(), "Deep hole".into(), Utc::now());
    issue.description = Some("on Main St".into());
    issue.category = "roads".into();
    assert_eq!(issue.matcher_text(), "Deep hole on Main St roads");
}

#[test]
fn bare_report_deserializes_with_defaults() {
    let json = r#"{
        "id": "city-abc",
        "title": "Overflowing bin",
        "created_at": "2026-03-01T10:00:00Z",
        "updated_at": "2026-03-01T10:00:00Z"
    }"#;
    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.status, Status::Open);
    assert_eq!(issue.priority, Priority::Medium);
    assert_eq!(issue.category, "other");
    assert_eq!(issue.address, "");
}

#[parameterized(
    none = { None, None, true },
    both = { Some(40.7), Some(-74.0), true },
    only_lat = { Some(40.7), None, false },
    only_lng = { None, Some(-74.0), false },
    lat_out_of_range = { Some(91.0), Some(0.0), false },
    lng_out_of_range = { Some(0.0), Some(-181.0), false },
)]
fn coordinates_validation(lat: Option<f64>, lng: Option<f64>, ok: bool) {
    assert_eq!(validate_coordinates(lat, lng).is_ok(), ok);
}

#[test]
fn event_builder_sets_fields() {
    let event = Event::new("city-1".into(), Action::Assigned)
        .with_values(None, Some("Roads".into()))
        .with_reason(Some("auto: keyword 'pothole'".into()));
    assert_eq!(event.id, 0);
    assert_eq!(event.new_value.as_deref(), Some("Roads"));
    assert_eq!(event.reason.as_deref(), Some("auto: keyword 'pothole'"));
}

#[parameterized(
    title = { "title", Field::Title },
    desc_alias = { "desc", Field::Description },
    category = { "Category", Field::Category },
    address = { "address", Field::Address },
)]
fn field_from_str(input: &str, expected: Field) {
    assert_eq!(input.parse::<Field>().unwrap(), expected);
}

#[test]
fn field_from_str_rejects_status() {
    let err = "status".parse::<Field>().unwrap_err();
    assert!(err.to_string().contains("editable fields"));
}

#[test]
fn field_get_reads_issue() {
    let issue = Issue::new("city-1".into(), "Pothole".into(), Utc::now());
    assert_eq!(Field::Title.get(&issue), Some("Pothole"));
    assert_eq!(Field::Description.get(&issue), None);
    assert_eq!(Field::Category.get(&issue), Some("other"));
}
