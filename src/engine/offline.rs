//! engine::offline
//!
//! Derive an approximate status payload from on-disk project state.
//!
//! The payload is shaped like a runtime one, restricted to what the disk
//! can tell us: declaration counts, the current phase, and (verbose) a
//! summary of the config document. Loading the project config is the one
//! fatal path; a missing declaration directory is an error, not zero.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::core::config::{ConfigError, ProjectConfig};
use crate::core::paths::ProjectPaths;
use crate::core::payload::{StatusMode, StatusPayload, MODE_KEY, OFFLINE_SOURCE, SOURCE_KEY};

/// Extensions counted as declaration documents.
const DOCUMENT_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Errors from offline collection.
#[derive(Debug, Error)]
pub enum OfflineError {
    #[error("{0}")]
    Config(ConfigError),

    #[error("failed to read directory '{path}': {message}")]
    ReadDir { path: PathBuf, message: String },
}

impl From<ConfigError> for OfflineError {
    fn from(err: ConfigError) -> Self {
        OfflineError::Config(err)
    }
}

/// Build an offline status payload for a project.
///
/// # Errors
///
/// Fails if the project config cannot be loaded, or if either declaration
/// directory cannot be read.
pub fn build_offline_status(
    paths: &ProjectPaths,
    verbose: bool,
) -> Result<StatusPayload, OfflineError> {
    let config = ProjectConfig::load(&paths.config_path())?;

    let component_count = count_documents(&paths.components_dir())?;
    let contract_count = count_documents(&paths.contracts_dir())?;
    debug!(component_count, contract_count, "counted declarations");

    let mut payload = StatusPayload::new();
    payload.insert(MODE_KEY, StatusMode::Offline.as_str());
    payload.insert(SOURCE_KEY, OFFLINE_SOURCE);
    payload.insert(
        "graph",
        json!({
            "component_count": component_count,
            "contract_count": contract_count,
        }),
    );

    if let Some(phase) = config
        .current_phase()
        .filter(|phase| !phase.is_null())
        .and_then(|phase| serde_json::to_value(phase).ok())
    {
        payload.insert("phase", phase);
    }

    if verbose {
        if let Some(summary) = config_summary(&config) {
            payload.insert("config_summary", summary);
        }
    }

    Ok(payload)
}

/// Count declaration documents directly inside `dir`.
///
/// Subdirectories are skipped; nothing is read recursively.
pub fn count_documents(dir: &Path) -> Result<usize, OfflineError> {
    let read_err = |e: std::io::Error| OfflineError::ReadDir {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    let mut count = 0;
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        if entry.file_type().map_err(read_err)?.is_dir() {
            continue;
        }
        if is_document(&entry.path()) {
            count += 1;
        }
    }
    Ok(count)
}

fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext))
}

/// Summarize display-affecting config settings.
///
/// Fields that cannot be computed are omitted; `None` when none can.
fn config_summary(config: &ProjectConfig) -> Option<Map<String, Value>> {
    let mut summary = Map::new();
    if let Some(profile) = config.active_profile() {
        summary.insert("active_profile".into(), profile.into());
    }
    if let Some(watched) = config.watched_paths_count() {
        summary.insert("watched_paths_count".into(), watched.into());
    }
    if let Some(ignored) = config.ignored_paths_count() {
        summary.insert("ignored_paths_count".into(), ignored.into());
    }
    (!summary.is_empty()).then_some(summary)
}
