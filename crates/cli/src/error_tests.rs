// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn not_initialized_points_at_init() {
    assert!(Error::NotInitialized.to_string().contains("ward init"));
}

#[test]
fn core_errors_display_unchanged() {
    let core = ward_core::Error::DepartmentNotFound("Parks".into());
    let expected = core.to_string();
    let err: Error = core.into();
    assert_eq!(err.to_string(), expected);
    assert!(expected.contains("hint:"));
}

#[test]
fn partial_failure_reports_counts() {
    let err = Error::PartialBulkFailure {
        succeeded: 2,
        failed: 1,
    };
    assert_eq!(
        err.to_string(),
        "some operations failed: 2 succeeded, 1 failed"
    );
}

#[test]
fn field_too_long_display() {
    let err = Error::FieldTooLong {
        field: "Title",
        actual: 600,
        max: 500,
    };
    assert_eq!(err.to_string(), "Title too long (600 chars, max 500)");
}

#[test]
fn parse_line_error_display() {
    let err = Error::ParseLineError {
        line: 3,
        reason: "missing field `title`".into(),
    };
    assert!(err.to_string().starts_with("line 3:"));
}
