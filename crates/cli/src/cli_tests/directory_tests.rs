// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;
use clap::Parser;
use yare::parameterized;

fn directory_of(args: &[&str]) -> Option<String> {
    let mut argv = vec!["ward"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().directory
}

#[parameterized(
    short_before = { &["-C", "/srv/city", "list"] },
    short_equals = { &["-C=/srv/city", "list"] },
    short_attached = { &["-C/srv/city", "list"] },
    long_before = { &["--directory", "/srv/city", "list"] },
    long_equals = { &["--directory=/srv/city", "list"] },
    after_subcommand = { &["list", "-C", "/srv/city"] },
    nested_subcommand = { &["dept", "list", "-C", "/srv/city"] },
    between_nested = { &["rule", "-C", "/srv/city", "list"] },
)]
fn test_directory_flag_forms(args: &[&str]) {
    assert_eq!(directory_of(args).as_deref(), Some("/srv/city"));
}

#[test]
fn test_no_directory_flag() {
    assert_eq!(directory_of(&["list"]), None);
}

#[test]
fn test_directory_with_stats_flags() {
    let cli = Cli::try_parse_from([
        "ward", "stats", "-C", "/srv/city", "--window", "30", "--area", "Downtown",
    ])
    .unwrap();
    assert_eq!(cli.directory.as_deref(), Some("/srv/city"));
    match cli.command {
        Command::Stats { window, area, .. } => {
            assert_eq!(window, Some(30));
            assert_eq!(area, vec!["Downtown".to_string()]);
        }
        _ => panic!("expected stats"),
    }
}

#[test]
fn test_directory_does_not_swallow_department_filter() {
    let cli = Cli::try_parse_from(["ward", "-C", "/srv/city", "stats", "-d", "Roads"]).unwrap();
    assert_eq!(cli.directory.as_deref(), Some("/srv/city"));
    match cli.command {
        Command::Stats { filters, .. } => assert_eq!(filters.department, vec!["Roads"]),
        _ => panic!("expected stats"),
    }
}

#[test]
fn test_directory_requires_a_path() {
    assert!(Cli::try_parse_from(["ward", "list", "-C"]).is_err());
}
