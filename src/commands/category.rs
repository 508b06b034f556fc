use anyhow::{Context as _, Result};
use colored::{Color, Colorize};
use std::io::Write;

use super::Context;
use crate::core::AliasStore;
use crate::ui::{styled, Layout, Style};

/// Handle `--category`: show the registered directories by category
///
/// Categories are fixed; this only reports them alongside how many stored
/// aliases use each prefix.
pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let store = match AliasStore::open(&ctx.config.alias_file) {
        Ok(store) => Some(store),
        Err(e) if e.is_store_missing() => None,
        Err(e) => return Err(e).context("Failed to load alias file"),
    };

    Layout::new(&ctx.metadata).render(out, |out| {
        writeln!(out, "{}", styled("List of category:", Style::bold(Color::Green)))?;

        for (category, entries) in ctx.registry.by_category() {
            writeln!(out, "{}", styled(category.as_str(), Style::bold(Color::Cyan)))?;
            for entry in entries {
                let count = store
                    .as_ref()
                    .map_or(0, |store| store.count_with_prefix(entry.prefix));
                writeln!(
                    out,
                    "  {:<3} {:<10} {} {}",
                    entry.prefix,
                    entry.label,
                    entry.path.display(),
                    format!("({} alias)", count).dimmed()
                )?;
            }
        }
        Ok(())
    })
}
