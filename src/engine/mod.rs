//! engine
//!
//! Status resolution: decide the regime, obtain a payload, normalize it.
//!
//! # Architecture
//!
//! The engine sits between the CLI and the two payload sources:
//!
//! 1. **Mode**: resolve `--connected` / `--offline` / `--auto` into a
//!    [`ModeSelection`] before any I/O
//! 2. **Fetch**: ask the runtime through a [`crate::runtime::RuntimeClient`]
//! 3. **Fallback**: on a Connect failure in auto mode only, collect offline
//! 4. **Normalize**: apply [`crate::core::payload::ensure_mode`] exactly once
//!
//! # Invariants
//!
//! - The runtime is contacted at most once per invocation
//! - Protocol and Response failures never trigger fallback
//! - Forced offline never opens a connection
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use lodetime::core::paths::ProjectPaths;
//! use lodetime::engine::{obtain_status, ModeSelection};
//! use lodetime::runtime::{resolve_endpoint, TcpRuntimeClient, STATUS_TIMEOUT};
//!
//! let paths = ProjectPaths::locate(Path::new("."))?;
//! let client = TcpRuntimeClient::new(resolve_endpoint(None, Some(&paths)), STATUS_TIMEOUT);
//! let selection = ModeSelection::resolve(false, false, true)?;
//!
//! let report = obtain_status(selection, &client, &paths, false, &mut |warning: &str| {
//!     eprintln!("warning: {}", warning)
//! })?;
//! println!("offline: {}", report.offline);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod modes;
pub mod offline;
pub mod status;

pub use modes::{FailureAction, ModeError, ModeSelection, ResolutionState};
pub use offline::{build_offline_status, count_documents, OfflineError};
pub use status::{obtain_status, StatusError, StatusReport, FALLBACK_WARNING};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::paths::ProjectPaths;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags. Passed explicitly into
/// every handler; nothing in the crate reads flags from global state.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Verbose status details.
    pub verbose: bool,
    /// Runtime endpoint override.
    pub endpoint: Option<String>,
}

impl Context {
    /// The directory commands act on.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Locate the enclosing project from the working directory.
    pub fn locate_project(&self) -> Result<ProjectPaths> {
        let cwd = self.working_dir()?;
        Ok(ProjectPaths::locate(&cwd)?)
    }

    /// Output verbosity for user-facing messages.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}
