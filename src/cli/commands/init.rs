//! init command - Initialize a LodeTime project in the working directory

use crate::core::config::schema::DEFAULT_PROJECT_CONFIG;
use crate::core::paths::ProjectPaths;
use crate::engine::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Initialize a LodeTime project.
///
/// Creates `.lodetime/` with its declaration directories and a default
/// `config.yaml`. An existing marker directory is left untouched.
pub fn init(ctx: &Context) -> Result<()> {
    let root = ctx.working_dir()?;
    let paths = ProjectPaths::for_root(&root);

    let verbosity = ctx.verbosity();

    if paths.exists() {
        output::print(".lodetime/ already exists", verbosity);
        return Ok(());
    }

    paths
        .ensure_dirs()
        .with_context(|| format!("Failed to create {}", paths.lode_dir().display()))?;

    let config_path = paths.config_path();
    std::fs::write(&config_path, DEFAULT_PROJECT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    output::print(
        "Initialized LodeTime project!\n\n\
         Next steps:\n  \
         1. Edit .lodetime/config.yaml\n  \
         2. Run: lode status --offline",
        verbosity,
    );

    Ok(())
}
