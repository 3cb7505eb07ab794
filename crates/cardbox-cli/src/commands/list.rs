//! The `cardbox list` command.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{DateTime, Utc};
use comfy_table::{Cell, Table};

use cardbox_core::model::{Card, CardStatus};
use cardbox_core::parser;

pub fn execute(deck_path: PathBuf) -> Result<()> {
    let now = Utc::now();
    let cards = parser::load_deck(&deck_path, now)?;

    if cards.is_empty() {
        println!("No valid flashcards found in {}.", deck_path.display());
        return Ok(());
    }

    println!("{}", deck_table(&cards, now));
    Ok(())
}

/// Collection listing with status tags, shared with the study loop.
pub(crate) fn deck_table(cards: &[Card], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["#", "Term", "Status", "Interval", "Due"]);

    for (i, card) in cards.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&card.term),
            Cell::new(card.status),
            Cell::new(card.interval_units),
            Cell::new(due_in(card, now)),
        ]);
    }

    table
}

fn due_in(card: &Card, now: DateTime<Utc>) -> String {
    if card.status == CardStatus::Learned {
        return "-".to_string();
    }
    if card.next_review_at <= now {
        return "now".to_string();
    }
    let secs = (card.next_review_at - now).num_seconds();
    format!("in {} min", (secs + 59) / 60)
}
