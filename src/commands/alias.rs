use anyhow::{Context as _, Result};
use colored::{Color, Colorize};
use std::io::Write;

use super::{setup, Context};
use crate::core::{AliasRecord, AliasStore, AppendOutcome};
use crate::ui::{styled, Layout, Notice, Style};

/// Handle `--list`
pub fn list<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let store = open_store(ctx, out)?;

    Layout::new(&ctx.metadata).with_usage().render(out, |out| {
        for (line_no, line) in store.malformed() {
            writeln!(
                out,
                "{}",
                format!("⚠️  Skipping malformed line {}: {}", line_no, line).yellow()
            )?;
        }

        if store.is_empty() {
            Notice::NoAlias.write(out, ctx.app_name())?;
            return Ok(());
        }

        writeln!(out, "{}", styled("List of alias:", Style::bold(Color::Green)))?;
        for (index, record) in store.records().enumerate() {
            let line = format!("{}. {} -> {}", index + 1, record.full_name(), record.path);
            writeln!(out, "{}", styled(&line, Style::bold(Color::White)))?;
        }
        Ok(())
    })
}

/// Handle `--add <name>`: alias the current directory
pub fn add<W: Write>(ctx: &Context, name: Option<&str>, out: &mut W) -> Result<()> {
    let Some(name) = name else {
        writeln!(out, "{}", styled("Please add new alias 👍", Style::plain(Color::Red)))?;
        return Ok(());
    };

    let path = current_dir(ctx)?;
    let mut store = open_store(ctx, out)?;

    let prefix = ctx.registry.prefix_for(&ctx.cwd);
    let record = AliasRecord::new(prefix, name, path).context("Cannot create alias")?;
    let full_name = record.full_name();
    let shadowed = store.find(&full_name).map(|existing| existing.path.clone());

    if store.append(record) == AppendOutcome::Duplicate {
        writeln!(out, "{}", styled("Alias already exist 👍", Style::plain(Color::Red)))?;
        return Ok(());
    }

    store
        .save()
        .with_context(|| format!("Failed to save alias file {:?}", store.path()))?;
    log::debug!("Added alias {} -> {}", full_name, path);

    if let Some(previous) = shadowed {
        writeln!(
            out,
            "{}",
            format!(
                "⚠️  '{}' already pointed at {}. The newer line wins when sourced.",
                full_name, previous
            )
            .yellow()
        )?;
    }
    writeln!(
        out,
        "{}",
        format!("✓ Alias '{}' -> {} added", full_name, path).green()
    )?;
    print_source_hint(ctx, out)?;

    Ok(())
}

/// Handle `--remove <token>`
pub fn remove<W: Write>(ctx: &Context, token: Option<&str>, out: &mut W) -> Result<()> {
    let Some(token) = token else {
        Notice::NoArgs.write(out, ctx.app_name())?;
        return Ok(());
    };

    let mut store = open_store(ctx, out)?;

    let Some(removed) = store.remove(token) else {
        Notice::NotFound(token).write(out, ctx.app_name())?;
        return Ok(());
    };

    store
        .save()
        .with_context(|| format!("Failed to save alias file {:?}", store.path()))?;

    writeln!(out, "{}", format!("✓ Removed {}", removed).green())?;
    print_source_hint(ctx, out)?;

    Ok(())
}

/// Handle `--edit <token>`: point an existing alias at the current directory
pub fn edit<W: Write>(ctx: &Context, token: Option<&str>, out: &mut W) -> Result<()> {
    let Some(token) = token else {
        Notice::NoArgs.write(out, ctx.app_name())?;
        return Ok(());
    };

    let path = current_dir(ctx)?;
    let mut store = open_store(ctx, out)?;

    let previous = store
        .edit(token, path)
        .context("Cannot point alias at the current directory")?;
    let Some(previous) = previous else {
        Notice::NotFound(token).write(out, ctx.app_name())?;
        return Ok(());
    };

    store
        .save()
        .with_context(|| format!("Failed to save alias file {:?}", store.path()))?;

    writeln!(
        out,
        "{}",
        format!("✓ Alias '{}' now points to {}", token, path).green()
    )?;
    writeln!(out, "  {}", format!("was {}", previous.path).dimmed())?;
    print_source_hint(ctx, out)?;

    Ok(())
}

/// Open the alias file, running setup first when it does not exist yet
fn open_store<W: Write>(ctx: &Context, out: &mut W) -> Result<AliasStore> {
    match AliasStore::open(&ctx.config.alias_file) {
        Ok(store) => Ok(store),
        Err(e) if e.is_store_missing() => {
            Notice::NoFile.write(out, ctx.app_name())?;
            setup::run(ctx, out)?;
            AliasStore::open(&ctx.config.alias_file).context("Failed to load alias file")
        }
        Err(e) => Err(e).context("Failed to load alias file"),
    }
}

fn current_dir(ctx: &Context) -> Result<&str> {
    ctx.cwd
        .to_str()
        .with_context(|| format!("Current directory {:?} is not valid UTF-8", ctx.cwd))
}

fn print_source_hint<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "  Run {} to refresh this shell.",
        format!("source '{}'", ctx.config.alias_file.display()).cyan()
    )?;
    Ok(())
}
