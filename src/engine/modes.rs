//! engine::modes
//!
//! Mode selection for `status` and the auto-mode fallback rule.
//!
//! # Architecture
//!
//! Three flags (`--connected`, `--offline`, `--auto`) resolve to a
//! [`ModeSelection`] before any I/O happens. Each selection starts the
//! resolution machine in one state:
//!
//! ```text
//! Connected    --fetch ok-->      done (connected)
//! Connected    --any failure-->   fail
//! AutoPending  --fetch ok-->      done (connected)
//! AutoPending  --Connect-->       Offline
//! AutoPending  --Protocol/Response--> fail
//! Offline      --collect-->       done (offline), runtime never contacted
//! ```
//!
//! The fallback rule lives in one function, [`ResolutionState::on_fetch_failure`],
//! so it can be audited and tested without sockets.
//!
//! **Key principle:** a reachable-but-broken runtime is never papered over
//! with offline data. Only absence triggers fallback.
//!
//! # Example
//!
//! ```
//! use lodetime::engine::modes::{FailureAction, ModeSelection};
//! use lodetime::runtime::ErrorKind;
//!
//! let state = ModeSelection::resolve(false, false, true).unwrap().initial_state();
//! assert_eq!(state.on_fetch_failure(ErrorKind::Connect), FailureAction::FallBackOffline);
//! assert_eq!(state.on_fetch_failure(ErrorKind::Protocol), FailureAction::Fail);
//! ```

use thiserror::Error;

use crate::runtime::ErrorKind;

/// Errors from mode resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModeError {
    /// Both forced modes were requested.
    #[error("choose only one of --connected or --offline")]
    Conflicting,

    /// No forced mode and auto disabled.
    #[error("mode required; use --auto, --connected, or --offline")]
    Required,
}

/// The caller's choice of strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeSelection {
    /// Prefer the runtime, degrade to offline if it is absent.
    Auto,
    /// Require the runtime.
    Connected,
    /// Never contact the runtime.
    Offline,
}

impl ModeSelection {
    /// Resolve a selection from flags.
    ///
    /// `connected` and `offline` are mutually exclusive regardless of
    /// `auto`. Either one wins over `auto`.
    pub fn resolve(connected: bool, offline: bool, auto: bool) -> Result<Self, ModeError> {
        match (connected, offline, auto) {
            (true, true, _) => Err(ModeError::Conflicting),
            (true, false, _) => Ok(Self::Connected),
            (false, true, _) => Ok(Self::Offline),
            (false, false, true) => Ok(Self::Auto),
            (false, false, false) => Err(ModeError::Required),
        }
    }

    /// The state the resolution machine starts in.
    pub fn initial_state(self) -> ResolutionState {
        match self {
            Self::Auto => ResolutionState::AutoPending,
            Self::Connected => ResolutionState::Connected,
            Self::Offline => ResolutionState::Offline,
        }
    }
}

/// States of the resolution machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// Fetch from the runtime; every failure is fatal.
    Connected,
    /// Collect from disk.
    Offline,
    /// Fetch from the runtime; absence moves to [`ResolutionState::Offline`].
    AutoPending,
}

/// What to do after a live fetch failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureAction {
    /// Collect offline status instead and warn.
    FallBackOffline,
    /// Surface the error and stop.
    Fail,
}

impl ResolutionState {
    /// Whether this state starts by contacting the runtime.
    pub fn contacts_runtime(self) -> bool {
        !matches!(self, Self::Offline)
    }

    /// Decide how to handle a failed fetch of the given class.
    pub fn on_fetch_failure(self, kind: ErrorKind) -> FailureAction {
        match (self, kind) {
            (Self::AutoPending, ErrorKind::Connect) => FailureAction::FallBackOffline,
            _ => FailureAction::Fail,
        }
    }
}
