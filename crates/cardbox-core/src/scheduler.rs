//! Session scheduler: due-card selection and rating-driven rescheduling.
//!
//! A [`Session`] owns the card collection, the current-card index, and the
//! learned counter. Callers drive it with [`Session::select_next`],
//! [`Session::rate`], and [`Session::pick`]; selection and rating take the
//! clock explicitly so behavior is deterministic under test.

use chrono::{DateTime, Duration, Utc};

use crate::error::SessionError;
use crate::interval::{next_interval, LEARNED_THRESHOLD, MINUTES_PER_UNIT};
use crate::model::{Card, CardStatus, Progress, Rating};

/// Outcome of a selection: which card became current, and whether selecting
/// it consumed its `New` status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selected {
    pub index: usize,
    pub promoted: bool,
}

/// Outcome of one rating, returned so the presentation layer can react
/// without re-inspecting the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Review {
    pub rating: Rating,
    pub interval_units: u64,
    pub next_review_at: DateTime<Utc>,
    pub newly_learned: bool,
}

/// One study session over a fixed card collection.
///
/// The collection is created wholesale by the parser and never grows or
/// shrinks during a session; cards are mutated in place.
#[derive(Debug, Clone, Default)]
pub struct Session {
    cards: Vec<Card>,
    current: Option<usize>,
    learned: usize,
}

impl Session {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            current: None,
            learned: 0,
        }
    }

    /// Replace the collection wholesale and reset all counters. There is no
    /// merge of old and new decks.
    pub fn load(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.current = None;
        self.learned = 0;
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn learned(&self) -> usize {
        self.learned
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.current.map(|i| &self.cards[i])
    }

    pub fn progress(&self) -> Progress {
        Progress {
            learned: self.learned,
            total: self.cards.len(),
        }
    }

    /// Number of cards due at `now`.
    pub fn due_count(&self, now: DateTime<Utc>) -> usize {
        self.cards.iter().filter(|c| c.is_due(now)).count()
    }

    /// Select the highest-priority due card and make it current.
    ///
    /// Due cards order as: `New` before everything else, then ascending due
    /// time, then original deck order (the sort is stable). Selecting a
    /// `New` card promotes it to `Learning` on the spot; `New` is a one-shot
    /// display status, consumed the instant the card is first chosen.
    /// Returns `None` when nothing is due, leaving every card untouched.
    pub fn select_next(&mut self, now: DateTime<Utc>) -> Option<Selected> {
        // Index in the key makes ties unique, so min_by_key picks the
        // earliest deck position within a status/time bucket.
        let index = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_due(now))
            .min_by_key(|(i, c)| (c.status != CardStatus::New, c.next_review_at, *i))
            .map(|(i, _)| i)?;

        let card = &mut self.cards[index];
        let promoted = card.status == CardStatus::New;
        if promoted {
            card.status = CardStatus::Learning;
            tracing::debug!(term = %card.term, "first showing, card now learning");
        }
        self.current = Some(index);
        Some(Selected { index, promoted })
    }

    /// Rate the current card and reschedule it.
    ///
    /// Applies the interval policy, moves the due time to `now` plus the new
    /// interval, and promotes the card to `Learned` permanently once its
    /// interval reaches the threshold, incrementing the learned counter
    /// exactly once per card.
    pub fn rate(&mut self, rating: Rating, now: DateTime<Utc>) -> Result<Review, SessionError> {
        let index = self.current.ok_or(SessionError::NoCurrentCard)?;
        let card = &mut self.cards[index];

        card.interval_units = next_interval(card.interval_units, rating);
        card.next_review_at =
            now + Duration::minutes(card.interval_units as i64 * MINUTES_PER_UNIT);

        let newly_learned =
            card.interval_units >= LEARNED_THRESHOLD && card.status != CardStatus::Learned;
        if newly_learned {
            card.status = CardStatus::Learned;
            self.learned += 1;
            tracing::debug!(term = %card.term, interval = card.interval_units, "card learned");
        }

        Ok(Review {
            rating,
            interval_units: card.interval_units,
            next_review_at: card.next_review_at,
            newly_learned,
        })
    }

    /// Manually make any card current, bypassing due-time filtering.
    ///
    /// Does not touch status, interval, or due time; the caller only gets
    /// the card's content to display.
    pub fn pick(&mut self, index: usize) -> Result<&Card, SessionError> {
        if index >= self.cards.len() {
            return Err(SessionError::OutOfRange {
                index,
                len: self.cards.len(),
            });
        }
        self.current = Some(index);
        Ok(&self.cards[index])
    }
}
