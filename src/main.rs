//! Words Virtuoso - CLI
//!
//! Loads the word and candidate lists, draws a secret word and runs the
//! guessing game on the terminal.

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use words_virtuoso::{commands::run_play, wordlists::GameLists};

#[derive(Parser)]
#[command(
    name = "words_virtuoso",
    about = "Guess the secret five-letter word from colored letter clues",
    version,
    author
)]
struct Cli {
    /// File with every word accepted as a guess, one per line
    words: PathBuf,

    /// File with the words the secret is drawn from; must be a subset of WORDS
    candidates: PathBuf,

    /// Seed the secret word choice for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "words_virtuoso=debug"
    } else {
        "words_virtuoso=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

fn run(cli: &Cli) -> Result<()> {
    let lists = GameLists::load(&cli.words, &cli.candidates)?;

    let mut rng = match cli.seed {
        Some(seed) => {
            debug!(seed, "using seeded rng");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    run_play(&lists, &mut rng, stdin, &mut stdout)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err}", "Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
