use anyhow::Result;
use colored::Color;
use std::io::Write;

use super::Context;
use crate::ui::{separator, styled, Style};

/// Handle `--test [msg]`
///
/// Echoes `msg` in a red frame. Without a message, reports how the current
/// directory resolves and where the files live.
pub fn execute<W: Write>(ctx: &Context, message: Option<&str>, out: &mut W) -> Result<()> {
    let lines = match message {
        Some(message) => vec![message.to_string()],
        None => report(ctx),
    };

    writeln!(out, "{}", separator(Color::Red))?;
    for line in &lines {
        writeln!(
            out,
            "{}",
            styled(&format!("output: {}", line), Style::bold(Color::Red))
        )?;
    }
    writeln!(out, "{}", separator(Color::Red))?;
    Ok(())
}

fn report(ctx: &Context) -> Vec<String> {
    let prefix = match ctx.registry.resolve(&ctx.cwd) {
        Some(entry) => format!("{} ({}, {})", entry.prefix, entry.label, entry.category),
        None => "none".to_string(),
    };

    vec![
        format!("cwd {}", ctx.cwd.display()),
        format!("prefix {}", prefix),
        format!("alias file {}", ctx.config.alias_file.display()),
        format!("metadata {}", ctx.config.metadata_file.display()),
        format!("set up {}", ctx.config.is_set_up()),
    ]
}
