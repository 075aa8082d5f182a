// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Generate an issue ID from prefix, title, timestamp and a collision nonce.
/// Format: `{prefix}-{hash}` where hash is the first 8 hex chars of SHA-256.
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>, nonce: u32) -> String {
    let mut hasher = Sha256::new();
    hasher.update(title.as_bytes());
    hasher.update(created_at.to_rfc3339().as_bytes());
    if nonce > 0 {
        hasher.update(nonce.to_le_bytes());
    }
    let hash = hasher.finalize();
    format!("{}-{}", prefix, hex::encode(&hash[..4]))
}

/// Generate an ID not accepted by `exists`, rehashing with a nonce on collision
/// so every ID keeps the `{prefix}-{8 hex}` shape.
pub fn generate_unique_id<F, E>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    mut exists: F,
) -> Result<String, E>
where
    F: FnMut(&str) -> Result<bool, E>,
{
    let mut nonce = 0;
    loop {
        let id = generate_id(prefix, title, created_at, nonce);
        if !exists(&id)? {
            return Ok(id);
        }
        nonce += 1;
    }
}

/// Validate that a prefix is 2+ lowercase alphanumeric with at least one letter.
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

/// Derive a prefix from a directory name, if one can be made valid.
pub fn prefix_from_dir_name(name: &str) -> Option<String> {
    let candidate: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .take(8)
        .collect();
    validate_prefix(&candidate).then_some(candidate)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
