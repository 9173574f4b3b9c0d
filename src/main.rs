//! Wordle Engine - CLI
//!
//! Terminal Wordle with a TUI mode, a plain CLI mode, and persistent
//! win/loss statistics.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordle_engine::{
    commands::{run_simple, run_stats},
    engine::{ConfigField, Game, GameConfig},
    stats::JsonFileStore,
    words::{SampledSource, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Wordle in the terminal with configurable grid and persistent statistics",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of attempts (1-12)
    #[arg(short, long, global = true)]
    attempts: Option<i64>,

    /// Word length (3-8)
    #[arg(short, long, global = true)]
    length: Option<i64>,

    /// Wordlist: 'embedded' (default) or path to a file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Path of the statistics file
    #[arg(long, global = true, default_value = "wordle_stats.json")]
    stats_file: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Print the persisted win/loss statistics
    Stats,
}

/// Build the word source from the -w flag
fn load_source(wordlist_mode: &str) -> Result<SampledSource> {
    match wordlist_mode {
        "embedded" => Ok(SampledSource::embedded()),
        path => {
            let words = load_from_file(path)?;
            Ok(SampledSource::new(words))
        }
    }
}

/// Assemble the engine from the CLI flags
fn build_game(cli: &Cli) -> Result<Game<SampledSource, JsonFileStore>> {
    let source = load_source(&cli.wordlist)?;
    let store = JsonFileStore::new(&cli.stats_file);
    let mut game = Game::new(GameConfig::default(), source, store);

    // Route the CLI dimensions through the controller; out-of-range
    // values are silently ignored, like any other invalid config input.
    if let Some(value) = cli.attempts {
        game.set_config(ConfigField::MaxAttempts, value);
    }
    if let Some(value) = cli.length {
        game.set_config(ConfigField::WordLength, value);
    }

    Ok(game)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command.as_ref().unwrap_or(&Commands::Play) {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Stats => run_stats_command(&cli),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let game = build_game(cli)?;
    run_tui(App::new(game))
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut game = build_game(cli)?;
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_stats_command(cli: &Cli) -> Result<()> {
    let mut store = JsonFileStore::new(&cli.stats_file);
    run_stats(&mut store).map_err(|e| anyhow::anyhow!(e))
}
