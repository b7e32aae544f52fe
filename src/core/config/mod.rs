//! core::config
//!
//! Configuration documents and loading.
//!
//! # Overview
//!
//! LodeTime reads two YAML documents, both read-only from the CLI's side:
//! - **Project**: `.lodetime/config.yaml`, required for offline status
//! - **User**: `<config_dir>/lode/config.yaml`, consulted only for the
//!   runtime endpoint
//!
//! # Failure Policy
//!
//! The two documents fail differently on purpose. The project document is
//! required data for offline status, so [`ProjectConfig::load`] returns an
//! error when it is missing or malformed. For endpoint lookup either
//! document is a convenience override, so [`ProjectConfig::load_optional`]
//! turns the same failures into "absent".
//!
//! # Example
//!
//! ```
//! use lodetime::core::config::ProjectConfig;
//!
//! let config = ProjectConfig::from_yaml_str(
//!     "runtime:\n  endpoint: 127.0.0.1:7000\nactive_profile: dev\n",
//! )
//! .unwrap();
//!
//! assert_eq!(config.endpoint(), Some("127.0.0.1:7000"));
//! assert_eq!(config.active_profile(), Some("dev"));
//! ```

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

use schema::keys;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

/// A loaded config document.
///
/// Immutable once loaded. All accessors treat absent keys and values of
/// the wrong type as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    root: Mapping,
}

impl ProjectConfig {
    /// Parse a document from YAML text.
    ///
    /// An empty document is an empty mapping. A document whose top level is
    /// not a mapping is rejected.
    pub fn from_yaml_str(contents: &str) -> Result<Self, String> {
        match serde_yaml::from_str::<Value>(contents).map_err(|e| e.to_string())? {
            Value::Null => Ok(Self::default()),
            Value::Mapping(root) => Ok(Self { root }),
            _ => Err("expected a mapping at the top level".to_string()),
        }
    }

    /// Load a document from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_yaml_str(&contents).map_err(|message| ConfigError::ParseError {
            path: path.to_path_buf(),
            message,
        })
    }

    /// Load a document from disk, treating any failure as absent.
    pub fn load_optional(path: &Path) -> Option<Self> {
        match Self::load(path) {
            Ok(config) => Some(config),
            Err(e) => {
                debug!("ignoring config document: {}", e);
                None
            }
        }
    }

    /// Get a top-level value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    /// Runtime endpoint override.
    ///
    /// Checked in order: `runtime.endpoint`, `runtime_endpoint`, `endpoint`.
    /// Empty strings are skipped.
    pub fn endpoint(&self) -> Option<&str> {
        let nested = self
            .get(keys::RUNTIME)
            .and_then(|runtime| runtime.get(keys::ENDPOINT));

        [
            nested,
            self.get(keys::RUNTIME_ENDPOINT),
            self.get(keys::ENDPOINT),
        ]
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
        .find(|endpoint| !endpoint.is_empty())
    }

    /// The `current_phase` value, of whatever type it was written as.
    pub fn current_phase(&self) -> Option<&Value> {
        self.get(keys::CURRENT_PHASE)
    }

    /// The `active_profile` name, if it is a non-empty string.
    pub fn active_profile(&self) -> Option<&str> {
        self.get(keys::ACTIVE_PROFILE)
            .and_then(Value::as_str)
            .filter(|profile| !profile.is_empty())
    }

    /// Total number of entries under every `zones.<name>.paths` list.
    ///
    /// `None` when `zones` is absent or not a mapping. Zones without a
    /// `paths` list contribute zero.
    pub fn watched_paths_count(&self) -> Option<usize> {
        let zones = self.get(keys::ZONES)?.as_mapping()?;
        Some(
            zones
                .values()
                .filter_map(|zone| zone.get(keys::PATHS))
                .filter_map(Value::as_sequence)
                .map(Vec::len)
                .sum(),
        )
    }

    /// Length of the `triggers.file_system.ignore` list.
    pub fn ignored_paths_count(&self) -> Option<usize> {
        self.get(keys::TRIGGERS)?
            .get(keys::FILE_SYSTEM)?
            .get(keys::IGNORE)?
            .as_sequence()
            .map(Vec::len)
    }
}
