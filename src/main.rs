//! Simulation CLI: run a series of matches between named strategies and
//! print the results as JSON.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fiefdom::sim::{run_series, SeriesConfig};
use fiefdom::strategy::registry;

#[derive(Parser)]
#[command(
    name = "fiefdom",
    about = "Simulate deck-building matches between automated strategies"
)]
struct Cli {
    /// Strategy names, one per player (e.g. random, big-money, smarter)
    #[arg(required = true)]
    strategies: Vec<String>,

    /// Card set to play with
    #[arg(short = 's', long, default_value = "standard")]
    set: String,

    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: usize,

    /// Base random seed; game i uses seed + i
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Kingdom piles per game (base piles are always added)
    #[arg(long, default_value_t = 10)]
    kingdom_size: usize,

    /// Card names to force into every supply (repeatable)
    #[arg(long)]
    include: Vec<String>,

    /// Abort matches after this many rounds
    #[arg(long)]
    round_limit: Option<u32>,

    /// Run games one after another instead of in parallel
    #[arg(long)]
    sequential: bool,

    /// Log verbosity (repeat to increase)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let catalog = match registry::create_catalog(&cli.set) {
        Ok(catalog) => Arc::new(catalog),
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let config = SeriesConfig {
        games: cli.games,
        base_seed: cli.seed,
        kingdom_size: cli.kingdom_size,
        include: cli.include,
        round_limit: cli.round_limit,
        parallel: !cli.sequential,
    };

    let result = match run_series(&catalog, &cli.strategies, &config) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("failed to serialize results: {err}");
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
