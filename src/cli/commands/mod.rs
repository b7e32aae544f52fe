//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine or runtime layer
//! 3. Formats and displays output
//!
//! Handlers return `anyhow::Result`; the binary turns an `Err` into a single
//! `error:` line and exit status 1.

mod check;
mod completion;
mod component;
mod init;
mod status;
mod version;

// Re-export command functions for testing and direct invocation
pub use check::check;
pub use completion::completion;
pub use component::component;
pub use init::init;
pub use status::status;
pub use version::version;

use std::time::Duration;

use crate::cli::args::Command;
use crate::engine::Context;
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Status {
            connected,
            offline,
            auto,
            json,
            timeout_ms,
        } => status::status(
            ctx,
            connected,
            offline,
            auto,
            json,
            timeout_ms.map(Duration::from_millis),
        ),
        Command::Check { timeout_ms } => {
            check::check(ctx, timeout_ms.map(Duration::from_millis))
        }
        Command::Component { id } => component::component(ctx, &id),
        Command::Init => init::init(ctx),
        Command::Version => version::version(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
