//! The persisted ensemble selection.
//!
//! Plays the role browser-local storage plays on the site: one key, two
//! valid literals, and silent defaulting when anything is off.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::group::Group;

/// Access to the visitor's persisted group choice.
///
/// Injected into whichever component needs it; tests use
/// [`MemorySelectionStore`] instead of touching the real config directory.
pub trait SelectionStore {
    /// The active group. Defaults to [`Group::Yashika`] when nothing valid
    /// is persisted or storage is unavailable; reading never writes and
    /// never errors.
    fn active(&self) -> Group;

    /// Persist `group` as the active selection, overwriting any prior
    /// value. Takes effect for every later `active()` call, including in
    /// other processes.
    fn set_active(&mut self, group: Group) -> SiteResult<()>;
}

#[derive(Serialize, Deserialize)]
struct SelectionFile {
    group: String,
}

/// Selection persisted to `selection.toml` under the user config directory.
pub struct FileSelectionStore {
    path: PathBuf,
}

impl FileSelectionStore {
    /// Store at the fixed per-user location
    /// (`<config-dir>/yinyang/selection.toml`).
    pub fn open_default() -> SiteResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SiteError::Config("Could not determine config directory".into()))?
            .join("yinyang");

        Ok(Self::at(config_dir.join("selection.toml")))
    }

    /// Store at an explicit path.
    pub fn at(path: PathBuf) -> Self {
        FileSelectionStore { path }
    }

    fn read(&self) -> Option<Group> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let file: SelectionFile = toml::from_str(&content).ok()?;
        file.group.parse().ok()
    }
}

impl SelectionStore for FileSelectionStore {
    fn active(&self) -> Group {
        self.read().unwrap_or_default()
    }

    fn set_active(&mut self, group: Group) -> SiteResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = SelectionFile {
            group: group.as_str().to_string(),
        };
        let content =
            toml::to_string_pretty(&file).map_err(|e| SiteError::Config(e.to_string()))?;

        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory stand-in for tests and non-persistent callers.
#[derive(Debug, Default)]
pub struct MemorySelectionStore {
    selected: Option<Group>,
}

impl SelectionStore for MemorySelectionStore {
    fn active(&self) -> Group {
        self.selected.unwrap_or_default()
    }

    fn set_active(&mut self, group: Group) -> SiteResult<()> {
        self.selected = Some(group);
        Ok(())
    }
}
