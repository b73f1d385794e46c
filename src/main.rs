//! Wordle Game - terminal entry point
//!
//! Loads the word lists once at startup, then hands off to the TUI. Word
//! lists default to the embedded ones and can be overridden with files.

use anyhow::Result;
use clap::Parser;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use wordle_game::{
    interactive::{App, run_tui},
    wordlists::WordLists,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Terminal Wordle: six guesses to find a hidden five-letter word",
    version,
    author
)]
struct Cli {
    /// Path to a newline-delimited answers list (replaces the embedded one)
    #[arg(short = 'a', long)]
    answers: Option<PathBuf>,

    /// Path to a newline-delimited extra-guesses list (replaces the embedded one)
    #[arg(short = 'g', long)]
    guesses: Option<PathBuf>,

    /// RNG seed for target selection (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // One-time load; a failure is terminal and rendered by the TUI
    let lists = WordLists::load(cli.answers.as_deref(), cli.guesses.as_deref());
    match &lists {
        Ok(lists) => info!(
            "loaded {} answers, {} valid guesses",
            lists.answers().len(),
            lists.valid_guesses().len()
        ),
        Err(err) => warn!("word list load failed: {err}"),
    }

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let app = App::new(lists, rng);
    run_tui(app)
}
