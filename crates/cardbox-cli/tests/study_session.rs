//! Scripted study sessions driven through piped stdin.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardbox() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("cardbox").unwrap()
}

fn write_deck(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("deck.txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn sample_session_reveals_and_rates_every_card() {
    // Reveal + Easy for each of the 6 sample cards, then end of input at
    // the "nothing due" prompt.
    cardbox()
        .arg("study")
        .arg("--sample")
        .write_stdin("\n3\n".repeat(6))
        .assert()
        .success()
        .stdout(predicate::str::contains("6 cards loaded"))
        .stdout(predicate::str::contains("Term: apple"))
        .stdout(predicate::str::contains(
            "Answer: a fruit with red or green skin and a whitish interior",
        ))
        .stdout(predicate::str::contains("Next review in 3 min."))
        .stdout(predicate::str::contains("No cards due for review!"))
        .stdout(predicate::str::contains("Session over: 0/6 learned (0%)"));
}

#[test]
fn new_cards_come_in_deck_order() {
    // Quit right away; the first card shown must be the first sample record.
    cardbox()
        .arg("study")
        .arg("--sample")
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Term: apple"))
        .stdout(predicate::str::contains("Term: cat").not());
}

#[test]
fn listing_during_study_shows_whole_deck() {
    cardbox()
        .arg("study")
        .arg("--sample")
        .write_stdin("l\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ocean"))
        .stdout(predicate::str::contains("book"));
}

#[test]
fn manual_pick_shows_content_without_rating() {
    cardbox()
        .arg("study")
        .arg("--sample")
        .write_stdin("p 3\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Term: JavaScript"))
        .stdout(predicate::str::contains(
            "a high-level programming language often used for web development",
        ))
        // Viewing never reschedules anything.
        .stdout(predicate::str::contains("Next review").not());
}

#[test]
fn invalid_rating_reprompts_until_valid() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "a:first\nb:second\n");

    cardbox()
        .arg("study")
        .arg(&deck)
        .write_stdin("\nx\n2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter 1 (hard), 2 (good), or 3 (easy)."))
        .stdout(predicate::str::contains("Next review in 1 min."))
        .stdout(predicate::str::contains("Term: b"));
}

#[test]
fn skip_leaves_card_unrated() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "a:first\n");

    // Reveal, skip, then the same still-due card comes straight back.
    cardbox()
        .arg("study")
        .arg(&deck)
        .write_stdin("\ns\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Next review").not())
        .stdout(predicate::str::contains("Session over: 0/1 learned"));
}

#[test]
fn empty_deck_is_messaged_not_fatal() {
    let dir = TempDir::new().unwrap();
    let deck = write_deck(&dir, "no colons anywhere\n");

    cardbox()
        .arg("study")
        .arg(&deck)
        .assert()
        .success()
        .stdout(predicate::str::contains("No valid flashcards found."))
        .stdout(predicate::str::contains("term:description"));
}

#[test]
fn missing_deck_file_is_an_error() {
    cardbox()
        .arg("study")
        .arg("no-such-deck.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("no-such-deck.txt"));
}

#[test]
fn study_without_deck_or_sample_is_an_error() {
    cardbox()
        .arg("study")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provide a deck file or pass --sample"));
}
