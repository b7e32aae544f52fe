//! cli
//!
//! Command-line interface layer for LodeTime.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Delegate to command handlers
//! - Does NOT talk to the runtime or read `.lodetime/` directly
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to the
//! [`crate::engine`] for status resolution. Rendering goes through
//! [`crate::ui`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use crate::engine;
use anyhow::Result;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`, which parses the
/// arguments first so logging can be set up from the global flags.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = engine::Context {
        cwd: cli.cwd,
        debug: cli.debug,
        quiet: cli.quiet,
        verbose: cli.verbose,
        endpoint: cli.endpoint,
    };

    commands::dispatch(cli.command, &ctx)
}
