use colored::Color;
use std::io::{self, Write};

use super::formatters::{styled, Style};

/// Situations reported to the user instead of raised as errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice<'a> {
    NoAlias,
    NoArgs,
    NoFile,
    NotFound(&'a str),
}

impl Notice<'_> {
    /// Message text, naming the command that fixes the situation
    pub fn message(&self, app: &str) -> String {
        match self {
            Notice::NoAlias => format!(
                "No alias found, please add new alias \n | {} --add <name> | ",
                app
            ),
            Notice::NoArgs => format!("Please provide valid arguments \n | {} --help | ", app),
            Notice::NoFile => format!("No file found \n | {} --setup | ", app),
            Notice::NotFound(token) => format!(
                "No alias matches '{}' \n | {} --list | ",
                token, app
            ),
        }
    }

    pub fn write<W: Write>(&self, out: &mut W, app: &str) -> io::Result<()> {
        writeln!(out, "{}", styled(&self.message(app), Style::plain(Color::Red)))
    }
}
