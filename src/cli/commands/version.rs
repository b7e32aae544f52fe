//! version command - Print version information

use crate::engine::Context;
use anyhow::Result;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const COMMIT: Option<&str> = option_env!("LODE_BUILD_COMMIT");
const BUILD_DATE: Option<&str> = option_env!("LODE_BUILD_DATE");

/// Print version information.
pub fn version(ctx: &Context) -> Result<()> {
    print!("{}", version_text(ctx.verbose));
    Ok(())
}

fn version_text(verbose: bool) -> String {
    let mut out = format!("lode {}\n", VERSION);
    if verbose {
        out.push_str(&format!("commit: {}\n", COMMIT.unwrap_or("unknown")));
        out.push_str(&format!("built: {}\n", BUILD_DATE.unwrap_or("unknown")));
    }
    out
}
