// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.ward/config.toml`:
//! - `prefix`: issue ID prefix (e.g., "city" → "city-a1b2c3d4")
//! - `workspace`: optional directory holding `ward.db`
//! - `[assignment]`, `[analytics]`, `[watch]`: optional tuning sections

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::id::validate_prefix;

const WORK_DIR_NAME: &str = ".ward";
const CONFIG_FILE_NAME: &str = "config.toml";
const DB_FILE_NAME: &str = "ward.db";
const GITIGNORE_FILE_NAME: &str = ".gitignore";

/// Project configuration stored in `.ward/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Issue ID prefix (2+ lowercase alphanumeric with at least one letter).
    pub prefix: String,
    /// Optional directory for the database (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default)]
    pub assignment: AssignmentConfig,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    #[serde(default)]
    pub watch: WatchConfig,
}

/// Keyword auto-assignment settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Run the department matcher on new and imported issues that carry no department.
    #[serde(default = "default_true")]
    pub auto_assign: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        AssignmentConfig { auto_assign: true }
    }
}

/// Defaults for `ward stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Length of each comparison window in days.
    #[serde(default = "default_days")]
    pub window_days: u32,
    /// Number of days in the daily trend.
    #[serde(default = "default_days")]
    pub trend_days: u32,
    /// Named areas matched against addresses; empty groups by address segment.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub areas: Vec<String>,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        AnalyticsConfig {
            window_days: default_days(),
            trend_days: default_days(),
            areas: Vec::new(),
        }
    }
}

/// Polling for `ward log --follow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_days() -> u32 {
    7
}

fn default_interval_ms() -> u64 {
    1000
}

impl Config {
    /// Creates a new config with the given prefix and default sections.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrefix`] if the prefix is not valid.
    pub fn new(prefix: String) -> Result<Self> {
        if !validate_prefix(&prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(Config {
            prefix,
            workspace: None,
            assignment: AssignmentConfig::default(),
            analytics: AnalyticsConfig::default(),
            watch: WatchConfig::default(),
        })
    }

    /// Loads configuration from the given `.ward/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        if !validate_prefix(&config.prefix) {
            return Err(Error::InvalidPrefix);
        }
        Ok(config)
    }

    /// Saves configuration to the given `.ward/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(work_dir.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }
}

/// Find the `.ward` directory by walking up from the current directory.
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the database path from config.
pub fn get_db_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.workspace {
        Some(workspace) if Path::new(workspace).is_absolute() => {
            Path::new(workspace).join(DB_FILE_NAME)
        }
        // Relative workspaces resolve against the project root.
        Some(workspace) => work_dir
            .parent()
            .unwrap_or(work_dir)
            .join(workspace)
            .join(DB_FILE_NAME),
        None => work_dir.join(DB_FILE_NAME),
    }
}

/// Initialize a new `.ward` directory at `path` and write its config.
pub fn init_work_dir(path: &Path, prefix: &str, workspace: Option<&str>) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);
    if work_dir.exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    let mut config = Config::new(prefix.to_string())?;
    if let Some(ws) = workspace {
        let resolved = if Path::new(ws).is_absolute() {
            PathBuf::from(ws)
        } else {
            path.join(ws)
        };
        if !resolved.is_dir() {
            return Err(Error::WorkspaceNotFound(ws.to_string()));
        }
        config.workspace = Some(ws.to_string());
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;
    write_gitignore(&work_dir)?;
    Ok(work_dir)
}

/// Keep the database and its WAL files out of version control.
pub fn write_gitignore(work_dir: &Path) -> Result<()> {
    fs::write(
        work_dir.join(GITIGNORE_FILE_NAME),
        "# Local store\nward.db\nward.db-wal\nward.db-shm\n",
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
