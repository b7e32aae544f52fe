//! engine::status
//!
//! Obtain a normalized status payload for a mode selection.
//!
//! # Lifecycle
//!
//! ```text
//! ModeSelection -> [fetch from runtime] -> [fallback decision] -> [offline collect] -> ensure_mode
//! ```
//!
//! The runtime is contacted at most once. The payload is normalized exactly
//! once, here, before any renderer sees it. Non-fatal warnings go to the
//! caller's sink at the moment they arise, before the step they announce,
//! so a warning is never lost when that step then fails.

use thiserror::Error;
use tracing::warn;

use super::modes::{FailureAction, ModeSelection, ResolutionState};
use super::offline::{build_offline_status, OfflineError};
use crate::core::paths::ProjectPaths;
use crate::core::payload::{ensure_mode, StatusPayload};
use crate::runtime::{RuntimeClient, TransportError};

/// Warning emitted when auto mode degrades to offline.
pub const FALLBACK_WARNING: &str = "runtime not reachable, using offline mode";

/// Errors from obtaining status.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Connected status failed: {0}")]
    Connected(TransportError),

    #[error("Offline status failed: {0}")]
    Offline(OfflineError),
}

/// A normalized payload and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    /// The normalized payload.
    pub payload: StatusPayload,
    /// Whether the payload was derived from disk.
    pub offline: bool,
}

/// Obtain status according to `selection`.
///
/// `on_warning` receives each non-fatal warning as it is raised. The
/// fallback warning is delivered before offline collection starts.
///
/// # Errors
///
/// - [`StatusError::Connected`] when the runtime fetch fails and the
///   failure is not a fallback trigger for this selection
/// - [`StatusError::Offline`] when offline collection fails
pub fn obtain_status(
    selection: ModeSelection,
    client: &dyn RuntimeClient,
    paths: &ProjectPaths,
    verbose: bool,
    on_warning: &mut dyn FnMut(&str),
) -> Result<StatusReport, StatusError> {
    let state = selection.initial_state();

    let (payload, offline) = if state.contacts_runtime() {
        match client.fetch_status(verbose) {
            Ok(payload) => (payload, false),
            Err(err) => match state.on_fetch_failure(err.kind()) {
                FailureAction::FallBackOffline => {
                    warn!(endpoint = client.endpoint(), error = %err, "{}", FALLBACK_WARNING);
                    on_warning(FALLBACK_WARNING);
                    (collect_offline(paths, verbose)?, true)
                }
                FailureAction::Fail => return Err(StatusError::Connected(err)),
            },
        }
    } else {
        debug_assert_eq!(state, ResolutionState::Offline);
        (collect_offline(paths, verbose)?, true)
    };

    Ok(StatusReport {
        payload: ensure_mode(Some(payload), offline),
        offline,
    })
}

fn collect_offline(paths: &ProjectPaths, verbose: bool) -> Result<StatusPayload, StatusError> {
    build_offline_status(paths, verbose).map_err(StatusError::Offline)
}
