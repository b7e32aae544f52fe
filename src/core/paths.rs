//! core::paths
//!
//! Project location and centralized path routing for LodeTime storage.
//!
//! # Storage Layout
//!
//! A project is any directory containing a `.lodetime/` marker directory:
//! - `config.yaml` - Project configuration
//! - `components/` - One YAML document per declared component
//! - `contracts/` - One YAML document per declared contract
//!
//! The user-global configuration lives at `<config_dir>/lode/config.yaml`,
//! where `<config_dir>` is the platform's per-user configuration directory.
//!
//! # Example
//!
//! ```
//! use lodetime::core::paths::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new(PathBuf::from("/work/app/.lodetime"));
//!
//! assert_eq!(paths.project_root(), PathBuf::from("/work/app"));
//! assert_eq!(
//!     paths.config_path(),
//!     PathBuf::from("/work/app/.lodetime/config.yaml")
//! );
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Name of the project marker directory.
pub const MARKER_DIR: &str = ".lodetime";

/// Errors from project location.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocateError {
    #[error("Not in a LodeTime project (no .lodetime/ directory found)")]
    NotFound,
}

/// Path routing for a located project.
///
/// # Invariants
///
/// - `lode_dir` is the marker directory itself, not the project root
/// - No code outside this module should compute `*.join(".lodetime")` paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    lode_dir: PathBuf,
}

impl ProjectPaths {
    /// Create paths from a marker directory.
    pub fn new(lode_dir: PathBuf) -> Self {
        Self { lode_dir }
    }

    /// Create paths for a project rooted at `root` (marker may not exist yet).
    pub fn for_root(root: &Path) -> Self {
        Self::new(root.join(MARKER_DIR))
    }

    /// Walk from `start` toward the filesystem root looking for a marker
    /// directory.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError::NotFound`] if no ancestor contains `.lodetime/`.
    pub fn locate(start: &Path) -> Result<Self, LocateError> {
        start
            .ancestors()
            .map(|dir| dir.join(MARKER_DIR))
            .find(|candidate| candidate.is_dir())
            .map(Self::new)
            .ok_or(LocateError::NotFound)
    }

    /// The marker directory (`<root>/.lodetime`).
    pub fn lode_dir(&self) -> &Path {
        &self.lode_dir
    }

    /// The project root containing the marker directory.
    pub fn project_root(&self) -> PathBuf {
        self.lode_dir
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.lode_dir.clone())
    }

    /// `<lode_dir>/config.yaml`.
    pub fn config_path(&self) -> PathBuf {
        self.lode_dir.join("config.yaml")
    }

    /// `<lode_dir>/components/`.
    pub fn components_dir(&self) -> PathBuf {
        self.lode_dir.join("components")
    }

    /// `<lode_dir>/components/<id>.yaml`.
    pub fn component_path(&self, id: &str) -> PathBuf {
        self.components_dir().join(format!("{}.yaml", id))
    }

    /// `<lode_dir>/contracts/`.
    pub fn contracts_dir(&self) -> PathBuf {
        self.lode_dir.join("contracts")
    }

    /// Whether the marker directory exists on disk.
    pub fn exists(&self) -> bool {
        self.lode_dir.is_dir()
    }

    /// Ensure the marker directory and its declaration directories exist.
    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.lode_dir)?;
        std::fs::create_dir_all(self.components_dir())?;
        std::fs::create_dir_all(self.contracts_dir())?;
        Ok(())
    }
}

/// Path of the user-global config document, if the platform has a
/// per-user config directory.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lode").join("config.yaml"))
}
