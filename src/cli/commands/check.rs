//! check command - Check runtime health

use std::time::Duration;

use crate::engine::Context;
use crate::runtime::{fetch_status, resolve_endpoint, CHECK_TIMEOUT};
use anyhow::{bail, Result};
use tracing::debug;

/// Perform one non-verbose status exchange and report reachability.
///
/// Never falls back to offline data.
pub fn check(ctx: &Context, timeout: Option<Duration>) -> Result<()> {
    let paths = ctx.locate_project()?;
    let endpoint = resolve_endpoint(ctx.endpoint.as_deref(), Some(&paths));
    debug!(endpoint = %endpoint, "checking runtime");

    match fetch_status(&endpoint, false, timeout.unwrap_or(CHECK_TIMEOUT)) {
        Ok(_) => {
            println!("Runtime reachable.");
            Ok(())
        }
        Err(err) if err.is_connect() => bail!("Runtime not reachable: {}", err),
        Err(err) => bail!("Runtime check failed: {}", err),
    }
}
