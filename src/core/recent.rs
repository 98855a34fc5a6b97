//! Recently used import/export paths, persisted per user.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// Cached config directory path.
static CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the themedit config directory (cached).
fn config_dir() -> &'static Path {
    CONFIG_DIR.get_or_init(|| {
        directories::ProjectDirs::from("", "", "themedit")
            .map(|d| d.config_dir().to_path_buf())
            .unwrap_or_else(dirs_fallback)
    })
}

/// Persisted state schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentState {
    /// Schema version for migration.
    pub version: u32,
    /// Last file imported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_import: Option<String>,
    /// Last file exported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_export: Option<String>,
}

impl RecentState {
    /// Current schema version.
    pub const VERSION: u32 = 1;
}

/// Recent paths backed by a JSON file.
#[derive(Debug)]
pub struct RecentPaths {
    state_path: PathBuf,
    state: RecentState,
}

impl RecentPaths {
    /// Open the per-user store. A missing or corrupt file starts empty.
    #[must_use = "this returns a Result that should be checked"]
    pub fn open() -> std::io::Result<Self> {
        Self::with_path(config_dir().join("recent.json"))
    }

    /// Open with a custom state path (for testing).
    #[must_use = "this returns a Result that should be checked"]
    pub fn with_path(state_path: PathBuf) -> std::io::Result<Self> {
        let mut store = Self {
            state_path,
            state: RecentState::default(),
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> std::io::Result<()> {
        if !self.state_path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.state_path)?;
        self.state = serde_json::from_str(&content).unwrap_or_default();
        Ok(())
    }

    /// Save state to disk (atomic write).
    #[must_use = "this returns a Result that should be checked"]
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(parent) = self.state_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let state = RecentState {
            version: RecentState::VERSION,
            ..self.state.clone()
        };
        let temp_path = self.state_path.with_extension("json.tmp");
        let content = serde_json::to_string_pretty(&state)?;
        std::fs::write(&temp_path, content)?;
        std::fs::rename(&temp_path, &self.state_path)?;

        Ok(())
    }

    /// Last imported file.
    pub fn last_import(&self) -> Option<&str> {
        self.state.last_import.as_deref()
    }

    /// Last exported file.
    pub fn last_export(&self) -> Option<&str> {
        self.state.last_export.as_deref()
    }

    /// Record an import.
    pub fn set_last_import(&mut self, path: &Path) {
        self.state.last_import = Some(path.display().to_string());
    }

    /// Record an export.
    pub fn set_last_export(&mut self, path: &Path) {
        self.state.last_export = Some(path.display().to_string());
    }
}

/// Fallback config directory if `directories` fails.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(|h| Path::new(&h).join(".config").join("themedit"))
        .unwrap_or_else(|_| PathBuf::from(".themedit"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("recent.json");

        {
            let mut store = RecentPaths::with_path(state_path.clone()).unwrap();
            assert_eq!(store.last_import(), None);
            store.set_last_import(Path::new("/themes/in.eot"));
            store.set_last_export(Path::new("/themes/out.eot"));
            store.save().unwrap();
        }

        let store = RecentPaths::with_path(state_path.clone()).unwrap();
        assert_eq!(store.last_import(), Some("/themes/in.eot"));
        assert_eq!(store.last_export(), Some("/themes/out.eot"));

        let raw: RecentState =
            serde_json::from_str(&std::fs::read_to_string(state_path).unwrap()).unwrap();
        assert_eq!(raw.version, RecentState::VERSION);
    }

    #[test]
    fn corrupt_file_starts_empty() {
        let temp_dir = tempfile::tempdir().unwrap();
        let state_path = temp_dir.path().join("recent.json");
        std::fs::write(&state_path, "{{{").unwrap();

        let store = RecentPaths::with_path(state_path).unwrap();
        assert_eq!(store.last_export(), None);
    }
}
