//! Interval update policy.
//!
//! The simplified spaced-repetition model: one abstract interval unit equals
//! one minute of real time. Hard halves the interval, Good doubles it, Easy
//! triples it; a card whose interval reaches [`LEARNED_THRESHOLD`] units
//! graduates to learned.

use crate::model::Rating;

/// Interval at which a card graduates to `Learned` (30 units = 30 minutes).
pub const LEARNED_THRESHOLD: u64 = 30;

/// Minutes of real time per interval unit.
pub const MINUTES_PER_UNIT: i64 = 1;

/// Apply one rating to the prior interval.
///
/// Hard is the one legal contraction, clamped so an interval never returns
/// to zero once a card has been reviewed.
pub fn next_interval(current: u64, rating: Rating) -> u64 {
    match rating {
        Rating::Hard => (current / 2).max(1),
        Rating::Good => {
            if current == 0 {
                1
            } else {
                current * 2
            }
        }
        Rating::Easy => {
            if current == 0 {
                3
            } else {
                current * 3
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_halves_with_floor_of_one() {
        assert_eq!(next_interval(1, Rating::Hard), 1);
        assert_eq!(next_interval(2, Rating::Hard), 1);
        assert_eq!(next_interval(7, Rating::Hard), 3);
        assert_eq!(next_interval(0, Rating::Hard), 1);
    }

    #[test]
    fn good_starts_at_one_then_doubles() {
        assert_eq!(next_interval(0, Rating::Good), 1);
        assert_eq!(next_interval(1, Rating::Good), 2);
        assert_eq!(next_interval(8, Rating::Good), 16);
    }

    #[test]
    fn easy_starts_at_three_then_triples() {
        assert_eq!(next_interval(0, Rating::Easy), 3);
        assert_eq!(next_interval(3, Rating::Easy), 9);
        assert_eq!(next_interval(9, Rating::Easy), 27);
        assert_eq!(next_interval(27, Rating::Easy), 81);
    }

    #[test]
    fn easy_ladder_crosses_threshold_on_fourth_rating() {
        let mut i = 0;
        let mut crossings = 0;
        for _ in 0..4 {
            i = next_interval(i, Rating::Easy);
            if i >= LEARNED_THRESHOLD {
                crossings += 1;
            }
        }
        assert_eq!(i, 81);
        assert_eq!(crossings, 1);
    }
}
