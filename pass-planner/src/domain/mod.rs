//! Domain types for the rail pass planner.
//!
//! This module contains the core domain model types: stations on a linear
//! line, the set of boarding passes already spent, and validated
//! itineraries. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod error;
mod itinerary;
mod line;
mod station;
mod station_set;

pub use error::DomainError;
pub use itinerary::{Itinerary, Ride, Step, Walk};
pub use line::{DEFAULT_STATION_COUNT, Line};
pub use station::{InvalidStation, Station};
pub use station_set::StationSet;

/// Longest line a boarding pass can cover (one bit per station).
pub const MAX_STATIONS: usize = 32;
