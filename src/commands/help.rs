use anyhow::Result;
use colored::Color;
use std::io::Write;

use super::{Context, COMMANDS};
use crate::ui::{styled, Layout, Style};

const EXAMPLES: &[(&str, &str)] = &[
    ("--list", "or -l"),
    ("--add api", "alias the current directory as <prefix>-api"),
    ("--remove wk-api", "drop the first alias matching wk-api"),
    ("--edit wk-api", "point wk-api at the current directory"),
];

/// Handle `--help`, also shown when no command matches
pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let name = ctx.app_name();

    Layout::new(&ctx.metadata).with_usage().render(out, |out| {
        writeln!(out, "{}", styled("Options:", Style::bold(Color::White)))?;
        for spec in COMMANDS {
            let value = spec
                .value_name
                .map(|value| format!(" {}", value))
                .unwrap_or_default();
            writeln!(
                out,
                " --{} -{}{} => {}",
                spec.long, spec.short, value, spec.description
            )?;
        }

        writeln!(out, "{}", styled("Examples:", Style::bold(Color::White)))?;
        for (args, note) in EXAMPLES {
            writeln!(out, " {} {} {}", name, args, note)?;
        }
        Ok(())
    })
}
