//! Snakes and ladders: prints random games played on a fixed board.

mod board;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{ChainError, RenderStyle, Result};

use board::Cell;

/// Maximum number of cells visited in one game.
const MAX_GENERATION_LENGTH: usize = 60;

/// Command-line arguments for the board walker
#[derive(Parser)]
#[command(name = "rs-markov-snakes", version, about = "Generate random snakes-and-ladders games")]
struct Cli {
    /// Seed of the random generator
    seed: u64,

    /// Number of games to generate
    count: usize,

    /// Maximum number of cells per game
    #[arg(short, long, default_value_t = MAX_GENERATION_LENGTH)]
    max_length: usize,
}

fn run(cli: &Cli) -> Result<()> {
    let chain = board::build_chain()?;
    let start = chain
        .find(&Cell::new(1))
        .ok_or(ChainError::NoValidStart { states: chain.len() })?;
    info!("board ready, {} cell(s)", chain.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let io_err = |source| ChainError::Io { path: PathBuf::from("<stdout>"), source };

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let style = RenderStyle::default().with_connector(" -> ").with_truncation_marker(" ->");
    for i in 1..=cli.count {
        let walk = chain.generate_walk(start, cli.max_length, &mut rng)?;
        write!(out, "Random Walk {i}: ").map_err(io_err)?;
        walk.render(chain.capabilities(), &style, &mut out).map_err(io_err)?;
    }
    Ok(())
}

fn main() -> std::process::ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            std::process::ExitCode::FAILURE
        }
    }
}
