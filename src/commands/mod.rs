// Command handlers module
pub mod alias;
pub mod category;
pub mod diagnostics;
pub mod dispatch;
pub mod help;
pub mod setup;
pub mod version;

pub use dispatch::{build_cli, CommandId, CommandKind, CommandSpec, COMMANDS};

use anyhow::{Context as _, Result};
use std::env;
use std::io::Write;
use std::path::PathBuf;

use crate::core::{Config, Metadata, PathRegistry};

/// Everything a command needs for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub metadata: Metadata,
    pub registry: PathRegistry,
    /// Directory new aliases point at
    pub cwd: PathBuf,
}

impl Context {
    /// Resolve configuration and the current directory of this process
    pub fn load() -> Result<Self> {
        let config = Config::load().context("Failed to resolve wka directories")?;
        let cwd = env::current_dir().context("Failed to read the current directory")?;
        Ok(Self::new(config, cwd))
    }

    /// Build a context for explicit paths (useful for testing)
    pub fn new(config: Config, cwd: PathBuf) -> Self {
        let metadata = Metadata::load_or_default(&config.metadata_file);
        let registry = PathRegistry::for_home(&config.home_dir);
        Self {
            config,
            metadata,
            registry,
            cwd,
        }
    }

    /// Name the tool is invoked as in help and notices
    pub fn app_name(&self) -> &str {
        &self.metadata.name
    }
}

/// Run the handler for `kind`, writing its output to `out`
pub fn execute<W: Write>(kind: CommandKind, ctx: &Context, out: &mut W) -> Result<()> {
    match kind {
        CommandKind::Help => help::execute(ctx, out),
        CommandKind::Version => version::execute(ctx, out),
        CommandKind::List => alias::list(ctx, out),
        CommandKind::Add(name) => alias::add(ctx, name.as_deref(), out),
        CommandKind::Remove(token) => alias::remove(ctx, token.as_deref(), out),
        CommandKind::Edit(token) => alias::edit(ctx, token.as_deref(), out),
        CommandKind::Category => category::execute(ctx, out),
        CommandKind::Setup => setup::execute(ctx, out),
        CommandKind::Test(message) => diagnostics::execute(ctx, message.as_deref(), out),
    }
}
