//! cardbox CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "cardbox", version, about = "Flashcard study tool with spaced repetition")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Study a deck interactively
    Study {
        /// Path to a term:description deck file
        deck: Option<PathBuf>,

        /// Use the built-in sample deck instead of a file
        #[arg(long)]
        sample: bool,
    },

    /// Parse a deck and report what was accepted and dropped
    Check {
        /// Path to the deck file
        deck: PathBuf,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Print a parsed deck as a table
    List {
        /// Path to the deck file
        deck: PathBuf,
    },

    /// Create a starter deck file with the sample data
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cardbox=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Study { deck, sample } => commands::study::execute(deck, sample),
        Commands::Check { deck, format } => commands::check::execute(deck, format),
        Commands::List { deck } => commands::list::execute(deck),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
