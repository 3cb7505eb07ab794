//! cardbox-core — deck parsing and spaced-repetition session scheduling.
//!
//! This crate is the headless core of cardbox: the card data model, the
//! `term:description` deck parser, and the session scheduler that picks the
//! next due card and reschedules cards from three-level ratings. It has no
//! rendering surface; the CLI crate drives it.

pub mod error;
pub mod interval;
pub mod model;
pub mod parser;
pub mod scheduler;
