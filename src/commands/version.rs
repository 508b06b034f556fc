use anyhow::Result;
use colored::Color;
use std::io::Write;

use super::Context;
use crate::ui::{styled, Layout, Style};

pub fn execute<W: Write>(ctx: &Context, out: &mut W) -> Result<()> {
    let metadata = &ctx.metadata;
    Layout::new(metadata).render(out, |out| {
        let line = format!("CLI {}: {}", metadata.name, metadata.version);
        writeln!(out, "{}", styled(&line, Style::plain(Color::Blue)))?;
        Ok(())
    })
}
