//! Itinerary types.
//!
//! An `Itinerary` is a complete use of a boarding pass: a sequence of rides,
//! each optionally preceded by a walk from where the previous ride ended.

use std::fmt;

use super::{DomainError, Line, Station, StationSet};

/// A walk between stations along the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Walk {
    /// Where the walk starts (the previous alighting station)
    pub from: Station,
    /// Where the walk ends (the next boarding station)
    pub to: Station,
}

impl Walk {
    /// Creates a new walk between stations.
    pub fn new(from: Station, to: Station) -> Self {
        Self { from, to }
    }

    /// Number of sections walked.
    pub fn sections(&self) -> u32 {
        self.from.distance(self.to)
    }
}

/// A single train ride: board at one station, alight at another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ride {
    board: Station,
    alight: Station,
}

impl Ride {
    /// Creates a ride, checking the line's direction rules.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the ride has zero length, leaves the line, or
    /// departs a terminal in the wrong direction.
    pub fn new(line: &Line, board: Station, alight: Station) -> Result<Self, DomainError> {
        if !line.can_ride(board, alight) {
            return Err(DomainError::InvalidRide { board, alight });
        }
        Ok(Self { board, alight })
    }

    /// Station where this ride boards (and spends a pass).
    pub fn board(&self) -> Station {
        self.board
    }

    /// Station where this ride ends.
    pub fn alight(&self) -> Station {
        self.alight
    }

    /// Number of sections ridden.
    pub fn sections(&self) -> u32 {
        self.board.distance(self.alight)
    }
}

impl fmt::Display for Ride {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}→{}", self.board, self.alight)
    }
}

/// One step of an itinerary: an optional walk, then a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    /// Walk from the previous alighting station, if it differs from `ride.board()`
    pub walk: Option<Walk>,
    /// The ride taken in this step
    pub ride: Ride,
}

impl Step {
    /// Sections walked in this step.
    pub fn walk_sections(&self) -> u32 {
        self.walk.map_or(0, |w| w.sections())
    }

    /// Sections ridden in this step.
    pub fn ride_sections(&self) -> u32 {
        self.ride.sections()
    }
}

/// A complete itinerary that spends every boarding pass on the line.
///
/// # Invariants
///
/// - At least one step
/// - Every station on the line is boarded exactly once
/// - Every ride obeys the terminal direction rules
/// - Each step starts where the previous one ended, directly or via a walk
///   no longer than the walk budget
/// - The first step has no walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    steps: Vec<Step>,
}

impl Itinerary {
    /// Constructs an itinerary from steps, replaying them against the line.
    ///
    /// # Errors
    ///
    /// Returns the first rule the steps break.
    pub fn new(line: &Line, walk_budget: u32, steps: Vec<Step>) -> Result<Self, DomainError> {
        if steps.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }

        let mut boarded = StationSet::empty();
        let mut position: Option<Station> = None;

        for step in &steps {
            let ride = step.ride;
            for station in [ride.board, ride.alight] {
                if !line.contains(station) {
                    return Err(DomainError::StationOutOfRange(station));
                }
            }
            if !line.can_ride(ride.board, ride.alight) {
                return Err(DomainError::InvalidRide {
                    board: ride.board,
                    alight: ride.alight,
                });
            }

            match (position, step.walk) {
                (None, Some(_)) => {
                    return Err(DomainError::InvalidWalk(
                        "the first ride cannot be preceded by a walk",
                    ));
                }
                (None, None) => {}
                (Some(here), None) => {
                    if here != ride.board {
                        return Err(DomainError::Disconnected(here, ride.board));
                    }
                }
                (Some(here), Some(walk)) => {
                    if walk.from != here || walk.to != ride.board {
                        return Err(DomainError::Disconnected(here, ride.board));
                    }
                    if walk.sections() == 0 {
                        return Err(DomainError::InvalidWalk("walks must cover at least one section"));
                    }
                    if walk.sections() > walk_budget {
                        return Err(DomainError::WalkTooLong {
                            from: walk.from,
                            to: walk.to,
                            budget: walk_budget,
                        });
                    }
                }
            }

            if boarded.contains(ride.board) {
                return Err(DomainError::StationReused(ride.board));
            }
            boarded = boarded.with(ride.board);
            position = Some(ride.alight);
        }

        if boarded != line.all_stations() {
            return Err(DomainError::IncompleteBoarding {
                boarded: boarded.len(),
                required: line.station_count(),
            });
        }

        Ok(Itinerary { steps })
    }

    /// Constructs an itinerary from rides, inserting walks where needed.
    ///
    /// A walk is added before every ride (except the first) whose boarding
    /// station differs from where the previous ride alighted.
    ///
    /// # Errors
    ///
    /// Same as [`Itinerary::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use pass_planner::domain::{Itinerary, Line, Ride, Station};
    ///
    /// let line = Line::new(3).unwrap();
    /// let [a, b, c] = [0, 1, 2].map(|i| Station::new(i).unwrap());
    ///
    /// let rides = vec![
    ///     Ride::new(&line, b, a).unwrap(),
    ///     Ride::new(&line, a, c).unwrap(),
    ///     Ride::new(&line, c, a).unwrap(),
    /// ];
    /// let itinerary = Itinerary::from_rides(&line, 0, rides).unwrap();
    ///
    /// assert_eq!(itinerary.total_ride(), 5);
    /// assert_eq!(itinerary.total_walk(), 0);
    /// ```
    pub fn from_rides(
        line: &Line,
        walk_budget: u32,
        rides: Vec<Ride>,
    ) -> Result<Self, DomainError> {
        let mut steps = Vec::with_capacity(rides.len());
        let mut position: Option<Station> = None;

        for ride in rides {
            let walk = position
                .filter(|here| *here != ride.board)
                .map(|here| Walk::new(here, ride.board));
            steps.push(Step { walk, ride });
            position = Some(ride.alight);
        }

        Self::new(line, walk_budget, steps)
    }

    /// Returns all steps in order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns all rides in order.
    pub fn rides(&self) -> impl Iterator<Item = &Ride> {
        self.steps.iter().map(|s| &s.ride)
    }

    /// Returns all walks in order.
    pub fn walks(&self) -> impl Iterator<Item = &Walk> {
        self.steps.iter().filter_map(|s| s.walk.as_ref())
    }

    /// Stations in the order their passes were used.
    pub fn boarding_order(&self) -> Vec<Station> {
        self.rides().map(Ride::board).collect()
    }

    /// Total sections ridden, repeats included.
    pub fn total_ride(&self) -> u32 {
        self.rides().map(Ride::sections).sum()
    }

    /// Total sections walked.
    pub fn total_walk(&self) -> u32 {
        self.walks().map(Walk::sections).sum()
    }
}
