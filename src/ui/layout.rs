// Header/body/footer frame shared by every command

use colored::Color;
use std::io::{self, Write};

use super::formatters::{separator, styled, Style, GRAY};
use crate::core::Metadata;

pub struct Layout<'a> {
    metadata: &'a Metadata,
    show_usage: bool,
}

impl<'a> Layout<'a> {
    pub fn new(metadata: &'a Metadata) -> Self {
        Self {
            metadata,
            show_usage: false,
        }
    }

    /// Print the `Usage:` line above the top separator
    pub fn with_usage(mut self) -> Self {
        self.show_usage = true;
        self
    }

    pub fn header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.show_usage {
            writeln!(
                out,
                "\n{}",
                styled(
                    &format!("Usage: {} [options]", self.metadata.name),
                    Style::bold(Color::Magenta)
                )
            )?;
        }
        writeln!(out, "{}", separator(GRAY))
    }

    pub fn footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", separator(GRAY))?;
        writeln!(
            out,
            "{}",
            styled(
                &format!("CopyRight © {} {}", self.metadata.year, self.metadata.author),
                Style::plain(GRAY)
            )
        )
    }

    /// Frame the output of `body` with the header and footer
    pub fn render<W, F>(&self, out: &mut W, body: F) -> anyhow::Result<()>
    where
        W: Write,
        F: FnOnce(&mut W) -> anyhow::Result<()>,
    {
        self.header(out)?;
        body(out)?;
        self.footer(out)?;
        Ok(())
    }
}
