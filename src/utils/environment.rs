use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Environment variable overriding the default roster location
pub const ROSTER_ENV_VAR: &str = "STAFFSCOPE_ROSTER";

/// Resolve the roster file path.
///
/// Precedence: explicit CLI override, then `$STAFFSCOPE_ROSTER`, then
/// `~/.staffscope/roster.jsonl`.
pub fn resolve_roster_path(cli_override: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = cli_override {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = env::var(ROSTER_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".staffscope").join("roster.jsonl"))
}
