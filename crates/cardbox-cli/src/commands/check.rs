//! The `cardbox check` command.
//!
//! Parses a deck and reports aggregate counts of what was accepted and what
//! was dropped. Drops stay silent per line; only totals are shown.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;

use cardbox_core::parser;

pub fn execute(deck_path: PathBuf, format: String) -> Result<()> {
    let text = std::fs::read_to_string(&deck_path)
        .with_context(|| format!("failed to read deck file: {}", deck_path.display()))?;
    let (cards, stats) = parser::parse_deck_with_stats(&text, Utc::now());

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&stats)?),
        _ => {
            println!("Deck: {} ({} cards)", deck_path.display(), cards.len());
            println!("  lines: {} total, {} blank", stats.total_lines, stats.blank);
            println!(
                "  dropped: {} missing separator, {} empty term or description",
                stats.missing_separator, stats.empty_field
            );
            if cards.is_empty() {
                println!("No valid flashcards found. Expected one term:description per line.");
            } else {
                println!("Deck is ready to study.");
            }
        }
    }

    Ok(())
}
