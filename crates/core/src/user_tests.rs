// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    citizen = { "citizen", Role::Citizen },
    moderator = { "Moderator", Role::Moderator },
    admin = { "ADMIN", Role::Admin },
)]
fn role_from_str_valid(input: &str, expected: Role) {
    assert_eq!(input.parse::<Role>().unwrap(), expected);
}

#[parameterized(
    active = { "active", UserStatus::Active },
    blocked = { "blocked", UserStatus::Blocked },
    pending = { "pending", UserStatus::Pending },
)]
fn user_status_from_str_valid(input: &str, expected: UserStatus) {
    assert_eq!(input.parse::<UserStatus>().unwrap(), expected);
}

#[parameterized(
    mobile = { "mobile", Source::Mobile },
    app = { "app", Source::Mobile },
    web = { "Web", Source::Web },
)]
fn source_from_str_valid(input: &str, expected: Source) {
    assert_eq!(input.parse::<Source>().unwrap(), expected);
}

#[test]
fn invalid_values_are_rejected() {
    assert!("superuser".parse::<Role>().is_err());
    assert!("deleted".parse::<UserStatus>().is_err());
    assert!("fax".parse::<Source>().is_err());
}

#[test]
fn new_user_is_active_citizen() {
    let user = User::new("u1".into(), "a@example.org".into(), "Ada".into());
    assert_eq!(user.role, Role::Citizen);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.issues_reported, 0);
}
