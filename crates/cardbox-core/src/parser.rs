//! Deck text parser.
//!
//! One record per line, `term:description`. Only the first colon separates,
//! so a literal `:` inside the description is preserved. Malformed lines are
//! dropped silently; the leniency is deliberate, and [`parse_deck_with_stats`]
//! exposes aggregate counts for diagnostics without per-line noise.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::Card;

/// Parse deck text into cards, preserving line order.
///
/// Never fails: lines without a separator, or with an empty term or
/// description after trimming, are skipped. An empty result is a valid
/// outcome the caller must message ("no valid flashcards found").
pub fn parse_deck(text: &str, now: DateTime<Utc>) -> Vec<Card> {
    parse_deck_with_stats(text, now).0
}

/// Aggregate counts from one parse, for the `check` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    pub total_lines: usize,
    pub blank: usize,
    pub missing_separator: usize,
    pub empty_field: usize,
    pub accepted: usize,
}

/// Same semantics as [`parse_deck`], plus counts of what was dropped and why.
pub fn parse_deck_with_stats(text: &str, now: DateTime<Utc>) -> (Vec<Card>, ParseStats) {
    let mut cards = Vec::new();
    let mut stats = ParseStats::default();

    for raw in text.lines() {
        stats.total_lines += 1;
        let line = raw.trim();
        if line.is_empty() {
            stats.blank += 1;
            continue;
        }
        let Some((term, description)) = line.split_once(':') else {
            stats.missing_separator += 1;
            continue;
        };
        let term = term.trim();
        let description = description.trim();
        if term.is_empty() || description.is_empty() {
            stats.empty_field += 1;
            continue;
        }
        cards.push(Card::new(term, description, now));
    }

    stats.accepted = cards.len();
    (cards, stats)
}

/// Read and parse a deck file.
///
/// Reading is the one I/O error path in the system; parsing itself never
/// fails.
pub fn load_deck(path: &Path, now: DateTime<Utc>) -> Result<Vec<Card>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;
    Ok(parse_deck(&text, now))
}

/// Built-in demonstration deck, usable without a file.
pub const SAMPLE_DECK: &str = "\
apple:a fruit with red or green skin and a whitish interior
cat:a small domesticated carnivorous mammal
JavaScript:a high-level programming language often used for web development
mountain:a large natural elevation of the earth's surface
ocean:a very large expanse of sea
book:a written or printed work consisting of pages
";

/// Parse [`SAMPLE_DECK`] into fresh cards.
pub fn sample_deck(now: DateTime<Utc>) -> Vec<Card> {
    parse_deck(SAMPLE_DECK, now)
}
