//! Fox and Hounds CLI - Command-line interface
//!
//! Commands:
//! - play: Play an interactive game on the terminal
//! - check: Inspect a saved game

mod check;
mod play;
mod ui;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "foxhound")]
#[command(about = "Fox and Hounds board game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game
    Play(play::PlayArgs),
    /// Inspect a saved game
    Check(check::CheckArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout belongs to the board
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Check(args) => check::run(args),
    }
}
