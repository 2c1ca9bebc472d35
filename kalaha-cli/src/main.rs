//! Kalaha CLI - Command-line interface
//!
//! Commands:
//! - play: Hot-seat game in the terminal
//! - simulate: Automated games between simple strategies
//! - config: Print or write the default table configuration

mod config_cmd;
mod play;
mod render;
mod simulate;
mod strategy;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kalaha")]
#[command(about = "Kalaha (six-pit Mancala) rules engine")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game on this terminal, both sides taking turns
    Play(play::PlayArgs),
    /// Play automated games and report statistics
    Simulate(simulate::SimulateArgs),
    /// Print or write the default configuration
    Config(config_cmd::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never mix with the board or JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => play::run(args),
        Commands::Simulate(args) => simulate::run(args, cli.seed),
        Commands::Config(args) => config_cmd::run(args),
    }
}
