use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::warn;

use pd_core::ids::PokemonCode;
use pd_core::ports::RosterStorePort;
use pd_core::roster::RosterSnapshot;

// Entry names match the serde names on RosterSnapshot; the decode path below
// is lenient where the derive would reject the whole document.
const TEAM_KEY: &str = "team";
const FAVORITES_KEY: &str = "favoritos";

/// Stores the roster snapshot as one JSON document on disk.
///
/// Both entries live in the same document and are written through a
/// temp-file rename, so a concurrent reader of storage never observes them
/// half-updated.
pub struct FileRosterStore {
    path: PathBuf,
}

impl FileRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform-default location.
    pub fn at_default_location() -> Result<Self> {
        Ok(Self::new(crate::fs::default_snapshot_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("create roster dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    fn atomic_write(&self, content: &str) -> Result<()> {
        self.ensure_parent_dir()?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content)
            .with_context(|| format!("write temp roster snapshot failed: {}", tmp_path.display()))?;

        fs::rename(&tmp_path, &self.path).with_context(|| {
            format!(
                "rename temp roster snapshot failed: {} -> {}",
                tmp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    /// Decode stored content, degrading instead of failing.
    ///
    /// A document that is not JSON yields the empty snapshot; an entry that
    /// is not an array yields an empty set for that entry only; non-string
    /// elements inside an array are skipped. A corrupt cache must degrade to
    /// "nothing remembered", never crash the application.
    fn decode_snapshot(content: &str) -> RosterSnapshot {
        let root: Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "roster snapshot is not valid JSON, starting empty");
                return RosterSnapshot::default();
            }
        };

        RosterSnapshot {
            team: Self::decode_entry(&root, TEAM_KEY),
            favorites: Self::decode_entry(&root, FAVORITES_KEY),
        }
    }

    fn decode_entry(root: &Value, key: &str) -> Vec<PokemonCode> {
        match root.get(key) {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(PokemonCode::new)
                .collect(),
            Some(_) => {
                warn!(key, "roster entry is malformed, treating as empty");
                Vec::new()
            }
        }
    }
}

impl RosterStorePort for FileRosterStore {
    fn load(&self) -> Result<RosterSnapshot> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
                return Ok(RosterSnapshot::default());
            }
            Err(error) => {
                return Err(error).with_context(|| {
                    format!("read roster snapshot failed: {}", self.path.display())
                });
            }
        };

        Ok(Self::decode_snapshot(&content))
    }

    fn save(&self, snapshot: &RosterSnapshot) -> Result<()> {
        let content =
            serde_json::to_string_pretty(snapshot).context("serialize roster snapshot failed")?;

        self.atomic_write(&content)
    }
}
