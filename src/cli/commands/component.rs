//! component command - Show component details

use crate::core::component::Component;
use crate::engine::Context;
use anyhow::{Context as _, Result};

/// Print the declaration document of component `id`.
pub fn component(ctx: &Context, id: &str) -> Result<()> {
    let paths = ctx.locate_project()?;
    let component = Component::load(&paths, id)?;
    let document = component
        .to_yaml()
        .context("Failed to render component")?;

    println!("Component: {}", component.id());
    println!();
    print!("{}", document);
    Ok(())
}
