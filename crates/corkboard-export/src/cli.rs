use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Corkboard static dataset pipeline.
#[derive(Parser)]
#[command(
    name = "corkboard-export",
    version,
    about = "Validates the hand-authored events dataset and exports monthly JSON"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Check the dataset without writing any output.
    Validate(DatasetArgs),
    /// Validate the dataset and write the static JSON artifacts.
    Generate(GenerateArgs),
}

/// Dataset input paths shared by both subcommands.
#[derive(clap::Args)]
pub struct DatasetArgs {
    /// Path to the events YAML file.
    #[arg(long, default_value = "events.yml")]
    pub events: PathBuf,

    /// Path to the locations YAML file.
    #[arg(long, default_value = "locations.yml")]
    pub locations: PathBuf,
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Directory the JSON artifacts are written into.
    #[arg(short, long, default_value = "output")]
    pub out: PathBuf,
}
