// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::commands::testing::TestContext;
use chrono::Duration;
use ward_core::Status;

fn seeded() -> TestContext {
    let mut ctx = TestContext::new();
    let now = Utc::now();
    ctx.department("Roads", &[])
        .create_issue_with("city-1", "Pothole", |i| {
            i.category = "pothole".into();
            i.address = "12 Elm St, Downtown".into();
            i.created_at = now - Duration::days(2);
        })
        .create_issue_with("city-2", "Leak", |i| {
            i.category = "water".into();
            i.address = "3 River Rd, Northside".into();
            i.created_at = now - Duration::days(9);
        })
        .create_issue_with("city-3", "Crack", |i| {
            i.category = "pothole".into();
            i.address = "40 Elm St, Downtown".into();
            i.created_at = now - Duration::hours(5);
        })
        .assign("city-1", "Roads")
        .set_status("city-1", Status::Resolved)
        .set_status("city-2", Status::InProgress);
    ctx
}

fn run_json(ctx: &TestContext, filters: &FilterArgs, overrides: StatsOverrides) -> Summary {
    run_impl(
        &ctx.db,
        &ctx.config,
        filters,
        overrides,
        OutputFormat::Json,
        Utc::now(),
    )
    .unwrap()
}

#[test]
fn test_totals_and_rate() {
    let ctx = seeded();
    let summary = run_json(&ctx, &FilterArgs::default(), StatsOverrides::default());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.open, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.resolved, 1);
    assert_eq!(summary.resolution_rate, 33);
    assert_eq!(summary.window_days, 7);
}

#[test]
fn test_window_compares_periods() {
    let ctx = seeded();
    let summary = run_json(&ctx, &FilterArgs::default(), StatsOverrides::default());
    // two reported this week, one the week before
    assert_eq!(summary.reported_window.current, 2);
    assert_eq!(summary.reported_window.previous, 1);
    assert_eq!(summary.reported_window.change, 100);
    assert_eq!(summary.resolved_window.current, 1);
}

#[test]
fn test_filters_apply_before_aggregation() {
    let ctx = seeded();
    let filters = FilterArgs {
        department: vec!["roads".into()],
        ..FilterArgs::default()
    };
    let summary = run_json(&ctx, &filters, StatsOverrides::default());
    assert_eq!(summary.total, 1);
    assert_eq!(summary.resolution_rate, 100);
}

#[test]
fn test_area_overrides_replace_config() {
    let mut ctx = seeded();
    ctx.config.analytics.areas = vec!["Northside".into()];

    let summary = run_json(&ctx, &FilterArgs::default(), StatsOverrides::default());
    let keys: Vec<&str> = summary.by_location.iter().map(|c| c.key.as_str()).collect();
    assert!(keys.contains(&"Northside"));

    let overrides = StatsOverrides {
        areas: vec!["Downtown".into(), " ".into()],
        ..StatsOverrides::default()
    };
    let summary = run_json(&ctx, &FilterArgs::default(), overrides);
    let downtown = summary
        .by_location
        .iter()
        .find(|c| c.key == "Downtown")
        .unwrap();
    assert_eq!(downtown.count, 2);
    assert!(summary.by_location.iter().all(|c| c.key != "Northside"));
}

#[test]
fn test_options_merge_config_and_flags() {
    let mut config = Config::new("city".into()).unwrap();
    config.analytics.window_days = 30;
    let now = Utc::now();

    let merged = options(&config, StatsOverrides::default(), now).unwrap();
    assert_eq!(merged.window_days, 30);
    assert_eq!(merged.trend_days, 7);

    let merged = options(
        &config,
        StatsOverrides {
            window_days: Some(14),
            trend_days: Some(3),
            areas: Vec::new(),
        },
        now,
    )
    .unwrap();
    assert_eq!(merged.window_days, 14);
    assert_eq!(merged.trend_days, 3);
}

#[yare::parameterized(
    huge_window = { Some(4_000_000_000), None, "window" },
    huge_trend = { None, Some(100_000_000), "trend" },
    just_over = { Some(MAX_DAYS + 1), None, "window" },
)]
fn test_oversized_days_are_rejected(window: Option<u32>, trend: Option<u32>, name: &str) {
    let ctx = seeded();
    let err = run_impl(
        &ctx.db,
        &ctx.config,
        &FilterArgs::default(),
        StatsOverrides {
            window_days: window,
            trend_days: trend,
            areas: Vec::new(),
        },
        OutputFormat::Json,
        Utc::now(),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { field, .. } if field == name));
    assert!(err.to_string().contains("hint:"));
}

#[test]
fn test_max_days_is_accepted() {
    let ctx = seeded();
    let summary = run_json(
        &ctx,
        &FilterArgs::default(),
        StatsOverrides {
            window_days: Some(MAX_DAYS),
            trend_days: Some(MAX_DAYS),
            ..StatsOverrides::default()
        },
    );
    assert_eq!(summary.trend.len(), MAX_DAYS as usize);
    assert_eq!(summary.reported_window.previous, 0);
}

#[test]
fn test_until_far_future_date_is_not_an_error() {
    let ctx = seeded();
    let filters = FilterArgs {
        until: Some("9999-12-31".into()),
        ..FilterArgs::default()
    };
    assert_eq!(
        run_json(&ctx, &filters, StatsOverrides::default()).total,
        ctx.db.list_issues().unwrap().len()
    );
}

#[test]
fn test_trend_length_follows_option() {
    let ctx = seeded();
    let summary = run_json(
        &ctx,
        &FilterArgs::default(),
        StatsOverrides {
            trend_days: Some(3),
            ..StatsOverrides::default()
        },
    );
    assert_eq!(summary.trend.len(), 3);
}

#[test]
fn test_text_output() {
    let ctx = seeded();
    run_impl(
        &ctx.db,
        &ctx.config,
        &FilterArgs::default(),
        StatsOverrides::default(),
        OutputFormat::Text,
        Utc::now(),
    )
    .unwrap();
}

#[test]
fn test_oversized_config_trend_is_rejected() {
    let mut config = Config::new("city".into()).unwrap();
    config.analytics.trend_days = 100_000_000;
    let err = options(&config, StatsOverrides::default(), Utc::now()).unwrap_err();
    assert!(matches!(err, Error::InvalidValue { field: "trend", .. }));
}
