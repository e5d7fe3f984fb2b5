mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use shiftcal::Config;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::Render(args) => commands::render(args, &config),
        Command::Events(args) => commands::events(args),
        Command::Batch(args) => commands::batch(args, &config),
        Command::Init { filename } => commands::init(&filename),
    }
}
