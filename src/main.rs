use anyhow::Result;
use colored::Colorize;
use std::io;

use wka::commands::{self, CommandKind, Context};

fn main() {
    wka::init_logging();

    let kind = CommandKind::from_args(std::env::args_os());
    log::debug!("Dispatching {:?}", kind);

    // Failures are reported, never turned into a non-zero exit
    if let Err(e) = run(kind) {
        eprintln!("{}", format!("Error: {:#}", e).red());
    }
}

fn run(kind: CommandKind) -> Result<()> {
    let ctx = Context::load()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::execute(kind, &ctx, &mut out)
}
