//! Core data model types for cardbox.
//!
//! A deck is a flat collection of [`Card`] records. Scheduling state lives
//! directly on each card and is mutated in place by the session scheduler.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single term/description study unit with its scheduling state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Display key shown before the answer is revealed.
    pub term: String,
    /// The answer body.
    pub description: String,
    /// Forward-moving study status.
    pub status: CardStatus,
    /// Instant at which the card becomes eligible for selection again.
    pub next_review_at: DateTime<Utc>,
    /// Abstract spacing measure; 1 unit = 1 minute. `0` means never reviewed.
    pub interval_units: u64,
}

impl Card {
    /// Create a fresh card: status `New`, immediately due, zero interval.
    pub fn new(
        term: impl Into<String>,
        description: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            term: term.into(),
            description: description.into(),
            status: CardStatus::New,
            next_review_at: now,
            interval_units: 0,
        }
    }

    /// A card is due when its review instant has passed and it is not yet
    /// learned.
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review_at <= now && self.status != CardStatus::Learned
    }
}

/// Study status. Transitions only move forward: `New → Learning → Learned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatus {
    New,
    Learning,
    Learned,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStatus::New => write!(f, "new"),
            CardStatus::Learning => write!(f, "learning"),
            CardStatus::Learned => write!(f, "learned"),
        }
    }
}

/// User rating of a reviewed card. Exactly three values are admissible; the
/// numeric keys the CLI accepts are presentation-level only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Hard,
    Good,
    Easy,
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rating::Hard => write!(f, "hard"),
            Rating::Good => write!(f, "good"),
            Rating::Easy => write!(f, "easy"),
        }
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "h" | "hard" => Ok(Rating::Hard),
            "2" | "g" | "good" => Ok(Rating::Good),
            "3" | "e" | "easy" => Ok(Rating::Easy),
            other => Err(format!("unknown rating: {other}")),
        }
    }
}

/// Learned/total snapshot for the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub learned: usize,
    pub total: usize,
}

impl Progress {
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.learned as f64 / self.total as f64 * 100.0
        }
    }
}
