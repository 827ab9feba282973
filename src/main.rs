mod cli;
mod commands;
mod config;
mod country;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Assess(args) => commands::assess(args),
        Command::Hazard(args) => commands::hazard(args),
        Command::Info(args) => commands::info_cmd(args),
    }
}
