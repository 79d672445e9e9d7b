//! STREAK CLI - Command-line interface
//!
//! Runs a tournament of N-in-a-row games between two players and prints the
//! results summary.

mod console;
mod factory;
mod tournament_cmd;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tournament_cmd::TournamentArgs;

#[derive(Parser)]
#[command(name = "streak")]
#[command(about = "N-in-a-row tournament between two players")]
struct Cli {
    #[command(flatten)]
    tournament: TournamentArgs,
}

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for boards and results
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tournament_cmd::run(cli.tournament)
}
