//! Noun Hangman - CLI
//!
//! Analyzes a text file, prints its lexical diagnostics, and plays a letter-guessing
//! game over its most frequent nouns.

use anyhow::{Context, Result, bail};
use clap::Parser;
use noun_hangman::{
    analysis::{Analyzer, AnalyzerConfig},
    commands::{analyze_text, run_play},
    game::{GameConfig, RandomPicker, Session},
    output::print_analysis_result,
};
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Upper bound for `--score`
const MAX_STARTING_SCORE: i64 = 1_000_000;

#[derive(Parser)]
#[command(
    name = "noun_hangman",
    about = "Guess the most frequent nouns of a text, one letter at a time",
    version,
    author
)]
struct Cli {
    /// Text file to analyze and draw words from
    file: Option<PathBuf>,

    /// Seed for word selection (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Starting score
    #[arg(
        long,
        default_value_t = 5,
        value_parser = clap::value_parser!(i32).range(0..=MAX_STARTING_SCORE)
    )]
    score: i32,

    /// Maximum number of candidate nouns
    #[arg(long, default_value_t = 50)]
    top: usize,

    /// Candidate words must be longer than this many letters
    #[arg(long, default_value_t = 5)]
    min_length: usize,

    /// Print the analysis and exit without playing
    #[arg(long)]
    analyze_only: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    run(cli, io::stdin().lock(), io::stdout().lock())
}

/// Analyze the file named on the command line, then play over its nouns
///
/// Every startup failure (no filename, unreadable file, no tokens, no candidate nouns) is
/// returned before the first prompt is written.
fn run<R: BufRead, W: Write>(cli: Cli, input: R, output: W) -> Result<()> {
    let Some(path) = cli.file else {
        bail!("Please provide a filename as an argument.");
    };

    let text = fs::read_to_string(&path)
        .with_context(|| format!("File '{}' not found or not readable", path.display()))?;
    log::debug!("read {} bytes from {}", text.len(), path.display());

    let analyzer = Analyzer::english(AnalyzerConfig {
        min_length: cli.min_length,
        top: cli.top,
    })?;
    let result = analyze_text(&text, &analyzer)
        .with_context(|| format!("Cannot compute lexical diversity of '{}'", path.display()))?;
    print_analysis_result(&result);

    if cli.analyze_only {
        return Ok(());
    }

    let candidates = result.analysis.candidates()?;
    let picker = cli
        .seed
        .map_or_else(RandomPicker::from_entropy, RandomPicker::seeded);
    let config = GameConfig {
        starting_score: cli.score,
    };

    let mut session = Session::new(candidates, picker, &config);
    let final_state = run_play(&mut session, input, output)?;
    log::debug!(
        "session ended in {final_state:?} after {} solved words",
        session.words_solved()
    );

    Ok(())
}
