//! The `cardbox study` command: the interactive review loop.
//!
//! The loop mirrors the session API: select the next due card, show the
//! term, reveal the answer on request, take a rating, repeat. Re-evaluation
//! of due times happens only on user action; there is no polling.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use uuid::Uuid;

use cardbox_core::model::Rating;
use cardbox_core::parser;
use cardbox_core::scheduler::Session;

use super::list::deck_table;

pub fn execute(deck_path: Option<PathBuf>, sample: bool) -> Result<()> {
    let now = Utc::now();
    let cards = if sample {
        parser::sample_deck(now)
    } else {
        let path =
            deck_path.ok_or_else(|| anyhow::anyhow!("provide a deck file or pass --sample"))?;
        parser::load_deck(&path, now)?
    };

    if cards.is_empty() {
        println!("No valid flashcards found.");
        println!("Please check your file format (term:description).");
        return Ok(());
    }

    let session_id = Uuid::new_v4();
    tracing::info!(%session_id, cards = cards.len(), "starting study session");

    let mut session = Session::new(cards);
    println!(
        "{} cards loaded. [Enter] reveals, 1/2/3 rates, l lists, p <n> views, q quits.",
        session.cards().len()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    run(&mut session, &mut input)?;

    print_summary(&session);
    Ok(())
}

fn run(
    session: &mut Session,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    loop {
        let Some(selected) = session.select_next(Utc::now()) else {
            let p = session.progress();
            println!("\nNo cards due for review! All caught up for now.");
            println!("{}/{} learned.", p.learned, p.total);
            match prompt(input, "[Enter] check again, [q]uit > ")? {
                None => return Ok(()),
                Some(cmd) if cmd == "q" => return Ok(()),
                Some(_) => continue,
            }
        };

        let term = session.cards()[selected.index].term.clone();
        println!("\nTerm: {term}");

        let Some(cmd) = prompt(input, "[Enter] reveal, [l]ist, [p <n>] view, [q]uit > ")? else {
            return Ok(());
        };

        match cmd.as_str() {
            "" => {
                println!("Answer: {}", session.cards()[selected.index].description);
                if !rate_current(session, input)? {
                    return Ok(());
                }
            }
            "l" => println!("{}", deck_table(session.cards(), Utc::now())),
            "q" => return Ok(()),
            other => {
                if let Some(n) = other
                    .strip_prefix("p ")
                    .and_then(|s| s.trim().parse::<usize>().ok())
                {
                    view_card(session, n);
                } else {
                    println!("Commands: Enter (reveal), l (list), p <n> (view card n), q (quit).");
                }
            }
        }
    }
}

/// Rating sub-prompt for the revealed card. Returns `false` when the
/// session should end (quit or end of input).
fn rate_current(
    session: &mut Session,
    input: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<bool> {
    loop {
        let Some(cmd) = prompt(input, "[1] Hard, [2] Good, [3] Easy, [s]kip, [q]uit > ")? else {
            return Ok(false);
        };
        match cmd.as_str() {
            "q" => return Ok(false),
            "s" => return Ok(true),
            other => match other.parse::<Rating>() {
                Ok(rating) => {
                    let review = session.rate(rating, Utc::now())?;
                    if review.newly_learned {
                        let p = session.progress();
                        println!("Learned! {}/{} cards done.", p.learned, p.total);
                    } else {
                        println!("Next review in {} min.", review.interval_units);
                    }
                    return Ok(true);
                }
                Err(_) => println!("Enter 1 (hard), 2 (good), or 3 (easy)."),
            },
        }
    }
}

/// Manual pick from the listing: shows content only, no scheduling changes.
fn view_card(session: &mut Session, n: usize) {
    let len = session.cards().len();
    // Listing numbers are 1-based.
    let Some(i) = n.checked_sub(1) else {
        println!("Card numbers start at 1.");
        return;
    };
    match session.pick(i) {
        Ok(card) => {
            println!("Term: {}", card.term);
            println!("Answer: {}", card.description);
        }
        Err(_) => println!("No card number {n} (deck has {len} cards)."),
    }
}

fn prompt(
    input: &mut impl Iterator<Item = io::Result<String>>,
    msg: &str,
) -> Result<Option<String>> {
    print!("{msg}");
    io::stdout().flush()?;
    match input.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

fn print_summary(session: &Session) {
    let p = session.progress();
    println!(
        "\nSession over: {}/{} learned ({:.0}%)",
        p.learned,
        p.total,
        p.percent()
    );
    println!("{}", progress_bar(p.learned, p.total));
}

/// Fixed-width textual progress bar.
fn progress_bar(learned: usize, total: usize) -> String {
    const WIDTH: usize = 30;
    let filled = if total == 0 { 0 } else { learned * WIDTH / total };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(WIDTH - filled))
}
