//! status command - Show project status

use std::time::Duration;

use crate::engine::{obtain_status, Context, ModeSelection};
use crate::runtime::{resolve_endpoint, RuntimeClient, TcpRuntimeClient, STATUS_TIMEOUT};
use crate::ui::{output, render};
use anyhow::{Context as _, Result};
use tracing::debug;

/// Show project status.
///
/// # Arguments
///
/// * `ctx` - Execution context
/// * `connected` - Require the runtime
/// * `offline` - Never contact the runtime
/// * `auto` - Prefer the runtime, degrade to offline when it is absent
/// * `json` - Print only the structured render
/// * `timeout` - Exchange deadline override
pub fn status(
    ctx: &Context,
    connected: bool,
    offline: bool,
    auto: bool,
    json: bool,
    timeout: Option<Duration>,
) -> Result<()> {
    // Flags are checked before anything touches the disk or the network.
    let selection = ModeSelection::resolve(connected, offline, auto)?;
    let paths = ctx.locate_project()?;

    let endpoint = resolve_endpoint(ctx.endpoint.as_deref(), Some(&paths));
    let client = TcpRuntimeClient::new(endpoint, timeout.unwrap_or(STATUS_TIMEOUT));
    debug!(?selection, endpoint = client.endpoint(), "resolving status");

    let verbosity = ctx.verbosity();
    let report = obtain_status(selection, &client, &paths, ctx.verbose, &mut |warning: &str| {
        output::warn(warning, verbosity)
    })?;

    if json {
        let rendered = render::render_json(&report.payload, ctx.verbose, report.offline)
            .context("Failed to render JSON")?;
        println!("{}", rendered);
    } else {
        print!(
            "{}",
            render::render_human(&report.payload, ctx.verbose, report.offline)
        );
    }

    Ok(())
}
