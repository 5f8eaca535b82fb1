use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Pokedeck application data root directory.
///
/// - macOS: `~/Library/Application Support/pokedeck`
/// - Windows: `%APPDATA%\pokedeck`
/// - Linux: `$XDG_DATA_HOME/pokedeck` or `~/.local/share/pokedeck`
///
/// Does not create the directory; callers decide when to create it.
pub fn app_data_dir() -> Result<PathBuf> {
    let base_dir = dirs::data_dir().context("failed to get platform data directory")?;
    Ok(base_dir.join("pokedeck"))
}

/// Default location of the roster snapshot file.
pub fn default_snapshot_path() -> Result<PathBuf> {
    Ok(app_data_dir()?.join("roster.json"))
}
