// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use tracing::info;
use ward_core::Database;

use crate::config::{get_db_path, init_work_dir, Config};
use crate::error::{Error, Result};
use crate::id::{prefix_from_dir_name, validate_prefix};

pub fn run(prefix: Option<String>, path: Option<String>, workspace: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };
    let work_dir = run_impl(&target_path, prefix, workspace.as_deref())?;
    let config = Config::load(&work_dir)?;

    println!("Initialized ward at {}", work_dir.display());
    println!("Prefix: {}", config.prefix);
    if let Some(ws) = &config.workspace {
        println!("Workspace: {}", ws);
    }
    Ok(())
}

/// Create `.ward/`, its config and an empty store. Returns the `.ward` path.
pub(crate) fn run_impl(
    target_path: &Path,
    prefix: Option<String>,
    workspace: Option<&str>,
) -> Result<PathBuf> {
    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix_from_path(target_path)?,
    };
    if !validate_prefix(&prefix) {
        return Err(Error::InvalidPrefix);
    }

    let work_dir = init_work_dir(target_path, &prefix, workspace)?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    Database::open(&db_path)?;
    info!(path = %work_dir.display(), prefix = %prefix, "initialized");
    Ok(work_dir)
}

fn derive_prefix_from_path(path: &Path) -> Result<String> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    canonical
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(prefix_from_dir_name)
        .ok_or(Error::InvalidPrefix)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
