//! Sgf-Meta: SGF game-information extraction.
//!
//! ## Usage
//!
//! - `sgf-meta info <FILE>` - Print every recognized game-info field
//! - `sgf-meta summary <FILE>` - Print application, board size, and players
//! - Add `--json` to either command for machine-readable output

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sgf_meta::game::Game;
use sgf_meta::reader::{read_game, read_sgf};

/// Sgf-Meta: game-information extraction from SGF files
#[derive(Parser)]
#[command(name = "sgf-meta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every recognized game-info field (all of them must be present)
    Info {
        /// SGF file to read
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print application, board size, player names, and ranks only
    Summary {
        /// SGF file to read
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { file, json } => {
            let game = read_game(&read_input(&file)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            } else {
                print_info(&game);
            }
        }
        Commands::Summary { file, json } => {
            let game = read_sgf(&read_input(&file)?)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&game)?);
            } else {
                print_summary(&game);
            }
        }
    }

    Ok(())
}

fn read_input(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))
}

fn print_info(game: &Game) {
    print_summary(game);
    println!("Komi:        {}", opt_num(game.komi));
    match &game.result {
        Some(result) => println!("Result:      {} wins by {}", result.winner, result.amount),
        None => println!("Result:      -"),
    }
    println!("Date:        {}", opt_str(game.date.as_deref()));
    println!("Time:        {}", opt_num(game.time));
}

fn print_summary(game: &Game) {
    let metadata = game.metadata();
    let players = game.player_data();
    println!("Application: {}", opt_str(metadata.app));
    println!("Board size:  {}", metadata.board_size);
    println!(
        "Black:       {} ({})",
        opt_str(players.player_black),
        opt_str(players.black_rank)
    );
    println!(
        "White:       {} ({})",
        opt_str(players.player_white),
        opt_str(players.white_rank)
    );
}

fn opt_str(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn opt_num<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}
