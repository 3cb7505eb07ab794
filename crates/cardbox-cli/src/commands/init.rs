//! The `cardbox init` command.

use anyhow::Result;

use cardbox_core::parser::SAMPLE_DECK;

const DECK_FILE: &str = "deck.txt";

pub fn execute() -> Result<()> {
    if std::path::Path::new(DECK_FILE).exists() {
        println!("{DECK_FILE} already exists, skipping.");
    } else {
        std::fs::write(DECK_FILE, SAMPLE_DECK)?;
        println!("Created {DECK_FILE}");
    }

    println!("\nNext steps:");
    println!("  1. Edit {DECK_FILE} with your own term:description lines");
    println!("  2. Run: cardbox check {DECK_FILE}");
    println!("  3. Run: cardbox study {DECK_FILE}");

    Ok(())
}
