//! Database path resolution.

use std::path::Path;

use anyhow::{Context, Result};

/// Resolve the taskrepo database path.
/// Checks `TASKREPO_DB` env var, falls back to `$HOME/.taskrepo/taskrepo.db`.
pub fn db_path() -> String {
    std::env::var("TASKREPO_DB").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/.taskrepo/taskrepo.db")
    })
}

/// Create the directory holding `db_path` if it is missing.
pub fn ensure_db_dir(db_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    Ok(())
}
