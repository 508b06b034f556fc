use anyhow::{Context as _, Result};
use colored::Colorize;
use std::fs;
use std::io::Write;

use super::Context;
use crate::core::{AliasStore, Metadata};
use crate::ui::Layout;

/// Handle `--setup`
pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    Layout::new(&ctx.metadata).render(out, |out| run(ctx, out))
}

/// Create the data directory, alias file and metadata
///
/// Safe to re-run: existing aliases are kept and only the metadata version is
/// refreshed.
pub(crate) fn run<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let config = &ctx.config;

    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", config.data_dir))?;

    let created = AliasStore::create(&config.alias_file)
        .with_context(|| format!("Failed to create alias file: {:?}", config.alias_file))?;
    if created {
        writeln!(
            out,
            "{}",
            format!("✓ Created alias file {}", config.alias_file.display()).green()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            format!("Alias file already exists at {}", config.alias_file.display()).yellow()
        )?;
    }

    let metadata = refreshed_metadata(ctx);
    metadata
        .save(&config.metadata_file)
        .with_context(|| format!("Failed to write metadata: {:?}", config.metadata_file))?;
    writeln!(
        out,
        "{}",
        format!("✓ Metadata saved to {}", config.metadata_file.display()).green()
    )?;

    writeln!(out)?;
    writeln!(out, "  To load your aliases in every shell, add this line to your rc file:")?;
    writeln!(
        out,
        "  {}",
        format!("source '{}'", config.alias_file.display()).cyan()
    )?;

    log::debug!("Setup complete in {:?}", config.data_dir);
    Ok(())
}

/// Keep the author and year of an earlier setup, update the version
fn refreshed_metadata(ctx: &Context) -> Metadata {
    let current = Metadata::from_package();
    match Metadata::load(&ctx.config.metadata_file) {
        Ok(Some(existing)) => Metadata {
            version: current.version,
            ..existing
        },
        _ => current,
    }
}
