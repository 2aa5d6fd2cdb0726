//! JSON store holding every workspace.
//!
//! # Storage layout
//!
//! ```text
//! ~/.macspace/              (mode 0700, created on first access)
//!   workspaces.json         (mode 0600)
//! ```
//!
//! The file path is a value held by [`Store`]; nothing here reads process-wide
//! state except [`Store::default_location`]. Tests build a `Store` over a
//! `TempDir` with [`Store::at_home`] or [`Store::new`].

use std::path::{Path, PathBuf};

use crate::error::{io_err, StoreError};
use crate::types::Document;

pub const STORE_DIR: &str = ".macspace";
pub const STORE_FILE: &str = "workspaces.json";

/// Handle on the persisted workspace document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store backed by exactly `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<home>/.macspace/workspaces.json`
    pub fn at_home(home: &Path) -> Self {
        Self::new(home.join(STORE_DIR).join(STORE_FILE))
    }

    /// `~/.macspace/workspaces.json`, resolved through `dirs::home_dir()`.
    pub fn default_location() -> Result<Self, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::HomeNotFound)?;
        Ok(Self::at_home(&home))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory and an empty document if either is missing.
    ///
    /// Never touches an existing file.
    pub fn ensure(&self) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
                set_dir_permissions(dir)?;
            }
        }
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "initializing empty store");
            self.write_atomic(&Document::default())?;
        }
        Ok(())
    }

    /// Read and parse the document, creating an empty one first if absent.
    ///
    /// Returns [`StoreError::Parse`] (with the file path) on malformed content.
    pub fn load(&self) -> Result<Document, StoreError> {
        self.ensure()?;
        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| io_err(&self.path, e))?;
        serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the file with `document`.
    pub fn save(&self, document: &Document) -> Result<(), StoreError> {
        self.ensure()?;
        self.write_atomic(document)?;
        tracing::debug!(
            path = %self.path.display(),
            workspaces = document.workspaces.len(),
            "store saved"
        );
        Ok(())
    }

    /// serialize → `<file>.tmp` sibling → `chmod 0600` → `rename`.
    fn write_atomic(&self, document: &Document) -> Result<(), StoreError> {
        let tmp = self.tmp_path();
        let mut json = serde_json::to_string_pretty(document)?;
        json.push('\n');
        std::fs::write(&tmp, json).map_err(|e| io_err(&tmp, e))?;
        set_file_permissions(&tmp)?;
        std::fs::rename(&tmp, &self.path).map_err(|e| io_err(&self.path, e))?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| STORE_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[cfg(unix)]
fn set_dir_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o700))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_dir_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(|e| io_err(path, e))
}
#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
