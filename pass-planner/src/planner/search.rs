//! Memoized itinerary search.
//!
//! Finds the itinerary that rides the most sections while spending every
//! boarding pass exactly once, walking as little as possible among the
//! itineraries that tie on riding.
//!
//! The search recurses over `(location, used passes)` states. The best
//! continuation from a state depends only on that pair and the walk budget,
//! so each solve keeps a memo table keyed by the pair and owns it for the
//! lifetime of a single walk budget.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{DomainError, Itinerary, Line, Ride, Station, StationSet};

use super::rank::Score;

/// Error from itinerary search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The search assembled an itinerary that breaks the pass rules
    #[error("planner produced an invalid itinerary: {0}")]
    InvalidItinerary(#[from] DomainError),
}

/// Result of itinerary search for one walk budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Maximum sections walkable in a single transfer.
    pub walk_budget: u32,

    /// The optimal itinerary, or `None` if no itinerary can spend every pass.
    pub plan: Option<Itinerary>,

    /// Number of search states evaluated.
    pub states_explored: usize,
}

impl SearchResult {
    /// Create an infeasible result.
    pub fn infeasible(walk_budget: u32) -> Self {
        Self {
            walk_budget,
            plan: None,
            states_explored: 0,
        }
    }

    /// Returns true if an itinerary was found.
    pub fn is_feasible(&self) -> bool {
        self.plan.is_some()
    }

    /// Total sections ridden by the optimal itinerary.
    pub fn total_ride(&self) -> Option<u32> {
        self.plan.as_ref().map(Itinerary::total_ride)
    }

    /// Total sections walked by the optimal itinerary.
    pub fn total_walk(&self) -> Option<u32> {
        self.plan.as_ref().map(Itinerary::total_walk)
    }
}

/// Memo key: where the traveller stands and which passes are spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct SearchState {
    location: Station,
    used: StationSet,
}

impl SearchState {
    /// State after taking `ride` from any position.
    fn after(used: StationSet, ride: &Ride) -> Self {
        Self {
            location: ride.alight(),
            used: used.with(ride.board()),
        }
    }
}

/// Best way to finish the journey from some state.
#[derive(Debug, Clone, Copy)]
struct Continuation {
    /// Totals for the rest of the journey, including `next`.
    score: Score,

    /// First ride of the rest of the journey; `None` once every pass is spent.
    next: Option<Ride>,
}

/// One solve: a line, a fixed walk budget, and the memo table for both.
struct Search<'a> {
    line: &'a Line,
    walk_budget: u32,
    memo: HashMap<SearchState, Option<Continuation>>,
}

impl<'a> Search<'a> {
    fn new(line: &'a Line, walk_budget: u32) -> Self {
        Self {
            line,
            walk_budget,
            memo: HashMap::new(),
        }
    }

    /// Best continuation from `state`, or `None` if the remaining passes
    /// cannot all be spent from here.
    fn best_from(&mut self, state: SearchState) -> Option<Continuation> {
        if let Some(cached) = self.memo.get(&state) {
            return *cached;
        }

        let result = self.explore(state);
        self.memo.insert(state, result);
        result
    }

    fn explore(&mut self, state: SearchState) -> Option<Continuation> {
        let line = self.line;

        if state.used.is_full(line.station_count()) {
            return Some(Continuation {
                score: Score::ZERO,
                next: None,
            });
        }

        let mut best: Option<Continuation> = None;

        for board in line.stations() {
            if state.used.contains(board) {
                continue;
            }

            let walk = state.location.distance(board);
            if walk > self.walk_budget {
                continue;
            }

            for alight in line.stations() {
                let Ok(ride) = Ride::new(line, board, alight) else {
                    continue;
                };

                let Some(future) = self.best_from(SearchState::after(state.used, &ride)) else {
                    continue;
                };

                let score = future.score.after(ride.sections(), walk);
                if best.is_none_or(|b| score > b.score) {
                    best = Some(Continuation {
                        score,
                        next: Some(ride),
                    });
                }
            }
        }

        best
    }

    /// Follow memoized choices from `first` to the end of the journey.
    fn rides_from(&self, first: Ride) -> Vec<Ride> {
        let mut rides = vec![first];
        let mut state = SearchState::after(StationSet::empty(), &first);

        while let Some(Some(Continuation {
            next: Some(ride), ..
        })) = self.memo.get(&state).copied()
        {
            rides.push(ride);
            state = SearchState::after(state.used, &ride);
        }

        rides
    }
}

/// Itinerary planner for a boarding pass on one line.
pub struct Planner<'a> {
    line: &'a Line,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(line: &'a Line) -> Self {
        Self { line }
    }

    /// Find the optimal itinerary for the given walk budget.
    ///
    /// The traveller starts already standing at their first boarding
    /// station, so the first ride has no walk in front of it. Ties on both
    /// riding and walking go to the first candidate in boarding-then-alighting
    /// index order.
    ///
    /// # Examples
    ///
    /// ```
    /// use pass_planner::domain::Line;
    /// use pass_planner::planner::Planner;
    ///
    /// let line = Line::default();
    /// let result = Planner::new(&line).solve(0).unwrap();
    ///
    /// assert_eq!(result.total_ride(), Some(27));
    /// assert_eq!(result.total_walk(), Some(0));
    /// ```
    pub fn solve(&self, walk_budget: u32) -> Result<SearchResult, SearchError> {
        let line = self.line;
        let mut search = Search::new(line, walk_budget);
        let mut best: Option<(Score, Ride)> = None;

        for board in line.stations() {
            for alight in line.stations() {
                let Ok(first) = Ride::new(line, board, alight) else {
                    continue;
                };

                let state = SearchState::after(StationSet::empty(), &first);
                let Some(future) = search.best_from(state) else {
                    trace!(%first, "no way to spend the remaining passes");
                    continue;
                };

                let score = future.score.after(first.sections(), 0);
                if best.is_none_or(|(b, _)| score > b) {
                    best = Some((score, first));
                }
            }
        }

        let states_explored = search.memo.len();

        let plan = match best {
            Some((score, first)) => {
                let itinerary = Itinerary::from_rides(line, walk_budget, search.rides_from(first))?;
                debug_assert_eq!(itinerary.total_ride(), score.ride);
                debug_assert_eq!(itinerary.total_walk(), score.walk);
                Some(itinerary)
            }
            None => None,
        };

        debug!(
            walk_budget,
            stations = line.station_count(),
            states_explored,
            ride = ?plan.as_ref().map(Itinerary::total_ride),
            walk = ?plan.as_ref().map(Itinerary::total_walk),
            "search complete"
        );

        Ok(SearchResult {
            walk_budget,
            plan,
            states_explored,
        })
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
