// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use crate::commands::testing::TestContext;
use ward_core::{Action, Status, User};

fn event(id: &str, action: Action) -> Event {
    Event::new(id.to_string(), action)
}

#[test]
fn matching_rule_sends_rendered_notification() {
    let mut ctx = TestContext::new();
    ctx.department("Roads", &[])
        .create_issue("city-1", "Pothole on Elm")
        .assign("city-1", "Roads")
        .set_status("city-1", Status::Resolved)
        .rule("resolved", Trigger::Resolved, "-d roads");

    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Resolved)).unwrap();

    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].title, "resolved: Pothole on Elm");
    assert_eq!(sent[0].body, "city-1 in Roads");
    assert_eq!(sent[0].rule.as_deref(), Some("resolved"));
    assert_eq!(ctx.db.list_notifications(10).unwrap().len(), 1);
}

#[test]
fn trigger_mismatch_sends_nothing() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("on-resolve", Trigger::Resolved, "");
    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Noted)).unwrap();
    assert!(sent.is_empty());
}

#[test]
fn wildcard_trigger_fires_for_any_action() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("all", Trigger::Any, "");
    for action in [Action::Created, Action::Noted, Action::Prioritized] {
        let sent = run_rules_for_event(&ctx.db, &event("city-1", action)).unwrap();
        assert_eq!(sent.len(), 1, "{action}");
    }
}

#[test]
fn condition_is_checked_against_current_state() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("urgent", Trigger::Prioritized, "-p critical");

    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Prioritized)).unwrap();
    assert!(sent.is_empty());

    ctx.set_priority("city-1", ward_core::Priority::Critical);
    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Prioritized)).unwrap();
    assert_eq!(sent.len(), 1);
}

#[test]
fn disabled_rules_are_skipped() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("quiet", Trigger::Any, "");
    ctx.db.set_rule_enabled("quiet", false).unwrap();
    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Noted)).unwrap();
    assert!(sent.is_empty());
}

#[test]
fn missing_template_skips_rule() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("orphan", Trigger::Any, "")
        .rule("kept", Trigger::Any, "");
    ctx.db.remove_template("orphan-tpl").unwrap();

    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Noted)).unwrap();

    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].rule.as_deref(), Some("kept"));
}

#[test]
fn recipients_follow_audience() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("all", Trigger::Created, "");
    ctx.db
        .create_user(&User::new(
            "u1".into(),
            "a@example.org".into(),
            "Ana".into(),
        ))
        .unwrap();
    ctx.db
        .create_user(&User::new(
            "u2".into(),
            "b@example.org".into(),
            "Ben".into(),
        ))
        .unwrap();

    let sent = run_rules_for_event(&ctx.db, &event("city-1", Action::Created)).unwrap();
    assert_eq!(sent[0].recipients, 2);
}

#[test]
fn evaluate_ignores_trigger() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("on-resolve", Trigger::Resolved, "-k pothole");
    let rule = ctx.db.get_rule("on-resolve").unwrap();
    let issue = ctx.db.get_issue("city-1").unwrap();

    match evaluate(&ctx.db, &rule, &issue).unwrap() {
        Evaluation::Fires { title, body } => {
            assert_eq!(title, "open: Pothole");
            assert_eq!(body, "city-1 in unassigned");
        }
        Evaluation::NoMatch => panic!("expected rule to fire"),
    }
}

#[test]
fn evaluate_reports_no_match() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole")
        .rule("water", Trigger::Any, "-k leak");
    let rule = ctx.db.get_rule("water").unwrap();
    let issue = ctx.db.get_issue("city-1").unwrap();
    assert!(matches!(
        evaluate(&ctx.db, &rule, &issue).unwrap(),
        Evaluation::NoMatch
    ));
}
