//! Session error types.
//!
//! The interactive surface cannot normally reach these (rating controls are
//! only offered while a card is current), but as a library API they are
//! reachable, so callers get a typed error instead of a panic.

use thiserror::Error;

/// Errors from misusing the session API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// A rating arrived while no card was current.
    #[error("no card is currently selected")]
    NoCurrentCard,

    /// A manual pick referenced an index outside the collection.
    #[error("card index {index} out of range (deck has {len} cards)")]
    OutOfRange { index: usize, len: usize },
}
