//! Ranking of candidate itineraries.
//!
//! Candidates are compared lexicographically: more riding is always better,
//! and between equal ride totals less walking is better.

use std::cmp::Ordering;

/// Ride and walk totals of a (partial) itinerary.
///
/// `Score` orders best-last: `a > b` means `a` is strictly preferable.
/// Equal scores are ties, which the planner breaks by keeping whichever
/// candidate it found first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    /// Sections ridden.
    pub ride: u32,
    /// Sections walked.
    pub walk: u32,
}

impl Score {
    /// The score of an itinerary that has nothing left to do.
    pub const ZERO: Score = Score { ride: 0, walk: 0 };

    /// Create a score.
    pub fn new(ride: u32, walk: u32) -> Self {
        Self { ride, walk }
    }

    /// Extend this score with one more step in front of it.
    pub fn after(self, ride: u32, walk: u32) -> Self {
        Self {
            ride: self.ride + ride,
            walk: self.walk + walk,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        // Primary: more riding
        self.ride
            .cmp(&other.ride)
            // Secondary: less walking
            .then_with(|| other.walk.cmp(&self.walk))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn more_riding_wins() {
        assert!(Score::new(10, 5) > Score::new(9, 0));
    }

    #[test]
    fn less_walking_breaks_ties() {
        assert!(Score::new(10, 1) > Score::new(10, 2));
        assert!(Score::new(10, 0) > Score::new(10, 1));
    }

    #[test]
    fn equal_scores_tie() {
        assert_eq!(
            Score::new(7, 3).cmp(&Score::new(7, 3)),
            Ordering::Equal
        );
        assert!(!(Score::new(7, 3) > Score::new(7, 3)));
    }

    #[test]
    fn max_picks_best() {
        let scores = [
            Score::new(31, 4),
            Score::new(33, 8),
            Score::new(33, 6),
            Score::new(27, 0),
        ];
        assert_eq!(scores.iter().max(), Some(&Score::new(33, 6)));
    }

    #[test]
    fn after_accumulates() {
        let score = Score::ZERO.after(6, 0).after(4, 2);
        assert_eq!(score, Score::new(10, 2));
    }
}
