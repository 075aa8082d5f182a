// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::TimeZone;
use std::convert::Infallible;
use yare::parameterized;

fn at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap()
}

#[test]
fn id_has_prefix_and_eight_hex_chars() {
    let id = generate_id("city", "Pothole on Main St", &at(), 0);
    let (prefix, hash) = id.split_once('-').unwrap();
    assert_eq!(prefix, "city");
    assert_eq!(hash.len(), 8);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn id_is_deterministic() {
    assert_eq!(
        generate_id("city", "Leak", &at(), 0),
        generate_id("city", "Leak", &at(), 0)
    );
    assert_ne!(
        generate_id("city", "Leak", &at(), 0),
        generate_id("city", "Leak", &at(), 1)
    );
}

#[test]
fn unique_id_without_collision_is_base_id() {
    let id = generate_unique_id("city", "Leak", &at(), |_| Ok::<_, Infallible>(false)).unwrap();
    assert_eq!(id, generate_id("city", "Leak", &at(), 0));
}

#[test]
fn unique_id_rehashes_on_collision() {
    let base = generate_id("city", "Leak", &at(), 0);
    let id = generate_unique_id("city", "Leak", &at(), |id| Ok::<_, Infallible>(id == base))
        .unwrap();
    assert_ne!(id, base);
    assert_eq!(id.len(), base.len());
}

#[test]
fn unique_id_propagates_lookup_errors() {
    let result = generate_unique_id("city", "Leak", &at(), |_| Err("db down"));
    assert_eq!(result, Err("db down"));
}

#[parameterized(
    short = { "ab", true },
    with_digits = { "city2", true },
    single_char = { "a", false },
    uppercase = { "City", false },
    digits_only = { "123", false },
    dash = { "my-city", false },
)]
fn prefix_validation(prefix: &str, valid: bool) {
    assert_eq!(validate_prefix(prefix), valid);
}

#[parameterized(
    plain = { "springfield", Some("springfi") },
    mixed_case = { "Town-Hall", Some("townhall") },
    too_short = { "x", None },
    numeric = { "2026", None },
)]
fn prefix_from_directory(name: &str, expected: Option<&str>) {
    assert_eq!(prefix_from_dir_name(name).as_deref(), expected);
}
