// Fixed command table and argument matching

use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};
use std::ffi::OsString;

/// Identifies a row of [`COMMANDS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandId {
    Help,
    Version,
    List,
    Add,
    Remove,
    Edit,
    Category,
    Setup,
    Test,
}

/// One row of the command table
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub id: CommandId,
    pub long: &'static str,
    pub short: char,
    /// Placeholder for the optional value the flag takes
    pub value_name: Option<&'static str>,
    pub description: &'static str,
}

/// Commands in priority order: when several flags are given, the first row wins
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        id: CommandId::Help,
        long: "help",
        short: 'h',
        value_name: None,
        description: "Show help",
    },
    CommandSpec {
        id: CommandId::Version,
        long: "version",
        short: 'v',
        value_name: None,
        description: "Show version",
    },
    CommandSpec {
        id: CommandId::List,
        long: "list",
        short: 'l',
        value_name: None,
        description: "List of alias",
    },
    CommandSpec {
        id: CommandId::Add,
        long: "add",
        short: 'a',
        value_name: Some("<name>"),
        description: "Add new alias for the current directory",
    },
    CommandSpec {
        id: CommandId::Remove,
        long: "remove",
        short: 'r',
        value_name: Some("<token>"),
        description: "Remove alias",
    },
    CommandSpec {
        id: CommandId::Edit,
        long: "edit",
        short: 'e',
        value_name: Some("<token>"),
        description: "Point alias at the current directory",
    },
    CommandSpec {
        id: CommandId::Category,
        long: "category",
        short: 'c',
        value_name: None,
        description: "List of category",
    },
    CommandSpec {
        id: CommandId::Setup,
        long: "setup",
        short: 's',
        value_name: None,
        description: "Setup new file",
    },
    CommandSpec {
        id: CommandId::Test,
        long: "test",
        short: 't',
        value_name: Some("[msg]"),
        description: "Test",
    },
];

const EXTRA_ARGS: &str = "extra";

/// A parsed invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    Version,
    List,
    Add(Option<String>),
    Remove(Option<String>),
    Edit(Option<String>),
    Category,
    Setup,
    Test(Option<String>),
}

impl CommandKind {
    /// Pick the command for the process arguments (binary name first)
    ///
    /// Falls back to [`CommandKind::Help`] when nothing matches or the
    /// arguments cannot be parsed.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match build_cli().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) => {
                log::debug!("Falling back to help: {}", e);
                return CommandKind::Help;
            }
        };

        COMMANDS
            .iter()
            .find(|spec| matches.value_source(spec.long) == Some(ValueSource::CommandLine))
            .map(|spec| {
                let value = spec
                    .value_name
                    .and_then(|_| matches.get_one::<String>(spec.long).cloned());
                Self::from_id(spec.id, value)
            })
            .unwrap_or(CommandKind::Help)
    }

    fn from_id(id: CommandId, value: Option<String>) -> Self {
        match id {
            CommandId::Help => CommandKind::Help,
            CommandId::Version => CommandKind::Version,
            CommandId::List => CommandKind::List,
            CommandId::Add => CommandKind::Add(value),
            CommandId::Remove => CommandKind::Remove(value),
            CommandId::Edit => CommandKind::Edit(value),
            CommandId::Category => CommandKind::Category,
            CommandId::Setup => CommandKind::Setup,
            CommandId::Test => CommandKind::Test(value),
        }
    }
}

/// Argument parser built from [`COMMANDS`]
///
/// Help and version are ordinary table rows, so clap's own flags are disabled.
pub fn build_cli() -> Command {
    let mut cli = Command::new(env!("CARGO_PKG_NAME"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .disable_help_flag(true)
        .disable_version_flag(true)
        .args_override_self(true)
        .arg(
            Arg::new(EXTRA_ARGS)
                .num_args(0..)
                .action(ArgAction::Append)
                .hide(true),
        );

    for spec in COMMANDS {
        let arg = Arg::new(spec.long)
            .long(spec.long)
            .short(spec.short)
            .help(spec.description);

        let arg = match spec.value_name {
            Some(value_name) => arg
                .value_name(value_name)
                .num_args(0..=1)
                .action(ArgAction::Set),
            None => arg.action(ArgAction::SetTrue),
        };
        cli = cli.arg(arg);
    }

    cli
}
