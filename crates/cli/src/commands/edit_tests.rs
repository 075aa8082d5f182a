// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use crate::error::Error;

#[test]
fn test_edit_title_logs_old_and_new() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole");
    run_impl(&ctx.db, "city-1", "title", "Deep pothole").unwrap();

    assert_eq!(ctx.db.get_issue("city-1").unwrap().title, "Deep pothole");
    let last = ctx.db.get_events("city-1").unwrap().pop().unwrap();
    assert_eq!(last.action, Action::Edited);
    assert_eq!(last.old_value.as_deref(), Some("Pothole"));
    assert_eq!(last.new_value.as_deref(), Some("Deep pothole"));
    assert_eq!(last.reason.as_deref(), Some("title"));
}

#[test]
fn test_edit_category_is_lowercased() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole");
    run_impl(&ctx.db, "city-1", "category", "Roads").unwrap();
    assert_eq!(ctx.db.get_issue("city-1").unwrap().category, "roads");
}

#[test]
fn test_clear_description() {
    let mut ctx = TestContext::new();
    ctx.create_issue_with("city-1", "Pothole", |i| {
        i.description = Some("deep".into());
    });
    run_impl(&ctx.db, "city-1", "desc", "").unwrap();

    assert!(ctx.db.get_issue("city-1").unwrap().description.is_none());
    let last = ctx.db.get_events("city-1").unwrap().pop().unwrap();
    assert_eq!(last.old_value.as_deref(), Some("deep"));
    assert!(last.new_value.is_none());
}

#[test]
fn test_unchanged_value_logs_nothing() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole");
    run_impl(&ctx.db, "city-1", "title", " Pothole ").unwrap();
    assert_eq!(ctx.actions("city-1"), vec![Action::Created]);
}

#[test]
fn test_unknown_field_rejected() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole");
    let err = run_impl(&ctx.db, "city-1", "status", "resolved").unwrap_err();
    assert!(matches!(err, Error::Core(ward_core::Error::InvalidInput(_))));
}

#[test]
fn test_empty_address_rejected() {
    let mut ctx = TestContext::new();
    ctx.create_issue("city-1", "Pothole");
    let err = run_impl(&ctx.db, "city-1", "address", "  ").unwrap_err();
    assert!(matches!(err, Error::FieldEmpty { field: "Address" }));
}
