//! LodeTime - command-line status for a locally-managed project
//!
//! `lode status` reports the operational status of a LodeTime project. It
//! works in two regimes: connected to a live runtime over a local socket, or
//! fully offline, deriving an approximate status from the `.lodetime/`
//! directory.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture. Data flows downward
//! only:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Mode resolution, offline fallback, payload normalization
//! - [`runtime`] - Endpoint resolution and the one-shot wire protocol
//! - [`core`] - Project paths, config documents, the status payload type
//! - [`ui`] - Renderers and user-facing output
//!
//! # Correctness Invariants
//!
//! 1. A normalized payload always carries `mode`; an offline one always
//!    carries `source = "offline"`
//! 2. Auto mode falls back to offline only when the runtime is unreachable
//! 3. At most one network exchange per invocation, bounded by a hard deadline
//! 4. Renderers never change the payload they are given

pub mod cli;
pub mod core;
pub mod engine;
pub mod runtime;
pub mod ui;
