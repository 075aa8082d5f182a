// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::Parser;

fn list_args(args: &[&str]) -> (FilterArgs, LimitArgs, bool, OutputFormat) {
    let mut argv = vec!["ward", "list"];
    argv.extend_from_slice(args);
    match Cli::try_parse_from(argv).unwrap().command {
        Command::List {
            filters,
            limits,
            all,
            output,
        } => (filters, limits, all, output),
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_defaults() {
    let (filters, limits, all, output) = list_args(&[]);
    assert!(filters.status.is_empty());
    assert!(!filters.unassigned);
    assert_eq!(limits.resolve(100), Some(100));
    assert!(!all);
    assert_eq!(output, OutputFormat::Text);
}

#[test]
fn test_list_repeated_filters_are_kept_separately() {
    let (filters, ..) = list_args(&["-p", "high,critical", "-c", "water", "-c", "roads"]);
    assert_eq!(filters.priority, vec!["high,critical"]);
    assert_eq!(filters.category, vec!["water", "roads"]);
}

#[test]
fn test_list_text_filters() {
    let (filters, ..) = list_args(&["-q", "main st", "--near", "Downtown", "--since", "7d"]);
    assert_eq!(filters.search.as_deref(), Some("main st"));
    assert_eq!(filters.near.as_deref(), Some("Downtown"));
    assert_eq!(filters.since.as_deref(), Some("7d"));
}

#[test]
fn test_list_no_limit() {
    let (_, limits, ..) = list_args(&["--no-limit"]);
    assert_eq!(limits.resolve(100), None);
}

#[test]
fn test_list_limit_conflicts_with_no_limit() {
    assert!(Cli::try_parse_from(["ward", "list", "-n", "5", "--no-limit"]).is_err());
}

#[test]
fn test_list_unassigned_conflicts_with_department() {
    assert!(Cli::try_parse_from(["ward", "list", "--unassigned", "-d", "Roads"]).is_err());
}

#[test]
fn test_list_all_conflicts_with_status() {
    assert!(Cli::try_parse_from(["ward", "list", "--all", "-s", "open"]).is_err());
}

#[test]
fn test_list_output_id_alias() {
    let (.., output) = list_args(&["-o", "ids"]);
    assert_eq!(output, OutputFormat::Id);
}

#[test]
fn test_stats_options() {
    let cli = Cli::try_parse_from([
        "ward", "stats", "--window", "30", "--trend", "14", "--area", "Downtown", "--area",
        "Northside", "-d", "Roads", "-o", "json",
    ])
    .unwrap();
    match cli.command {
        Command::Stats {
            filters,
            window,
            trend,
            area,
            output,
        } => {
            assert_eq!(window, Some(30));
            assert_eq!(trend, Some(14));
            assert_eq!(area, vec!["Downtown", "Northside"]);
            assert_eq!(filters.department, vec!["Roads"]);
            assert_eq!(output, OutputFormat::Json);
        }
        _ => panic!("Expected Stats command"),
    }
}

#[test]
fn test_stats_rejects_zero_window() {
    assert!(Cli::try_parse_from(["ward", "stats", "--window", "0"]).is_err());
}
