mod config;
mod diff_command;
mod input;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::diff_command::DiffArgs;

#[derive(Parser)]
#[command(
    name = "devtoolbox",
    version,
    about = "A collection of small developer utilities",
    long_about = "A collection of small developer utilities. \
    The diff tool compares two texts line by line and shows the result \
    side by side, interleaved, as plain text or as counts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Compare two texts line by line",
        long_about = "Compare two files (or one file and standard input, given as '-') \
        line by line. Adjacent removed and added lines are shown as one changed line \
        with the differing characters highlighted."
    )]
    Diff(DiffArgs),
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Diff(args) => diff_command::run(&args),
    }
}
