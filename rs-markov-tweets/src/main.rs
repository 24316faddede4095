//! Tweet generator: learns a word chain from a text corpus and prints
//! random sentences drawn from it.

mod corpus;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::io::read_file;
use rs_markov_core::{RenderStyle, Result};

/// Maximum number of words in a tweet.
const DEFAULT_MAX_LENGTH: usize = 20;

/// Command-line arguments for the tweet generator
#[derive(Parser)]
#[command(name = "rs-markov-tweets", version, about = "Generate random tweets from a text corpus")]
struct Cli {
    /// Seed of the random generator
    seed: u64,

    /// Number of tweets to generate
    count: usize,

    /// Path of the text corpus
    path: PathBuf,

    /// Number of words to read from the corpus (whole file when omitted)
    words_to_read: Option<usize>,

    /// Maximum number of words per tweet
    #[arg(short, long, default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Print the learned transition table before generating
    #[arg(short, long)]
    dump_frequencies: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let lines = read_file(&cli.path)?;
    let chain = corpus::build_chain(&lines, cli.words_to_read)?;
    info!("corpus '{}' yields {} state(s)", cli.path.display(), chain.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let io_err = |source| rs_markov_core::ChainError::Io { path: PathBuf::from("<stdout>"), source };

    if cli.dump_frequencies {
        chain.write_frequencies(&mut out).map_err(io_err)?;
    }

    let mut rng = StdRng::seed_from_u64(cli.seed);
    let style = RenderStyle::default().with_truncation_marker(".");
    for i in 1..=cli.count {
        let start = chain.pick_start(&mut rng)?;
        let walk = chain.generate_walk(start, cli.max_length, &mut rng)?;
        write!(out, "Tweet {i}: ").map_err(io_err)?;
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
