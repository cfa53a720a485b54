mod bucket;
mod cli;
mod dataset;
mod error;
mod generate;
mod logging;
mod output;
mod validate;

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
        Command::Validate(args) => validate::run(&args),
        Command::Generate(args) => generate::run(&args),
    }
}
