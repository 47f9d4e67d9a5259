//! Domain error types.
//!
//! These errors represent validation failures in the domain layer: lines
//! that cannot exist and itineraries that break the boarding pass rules.
//! An itinerary that simply cannot be found is not an error; the planner
//! reports it as an absent plan.

use super::Station;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Line construction failed
    #[error("invalid line: {0}")]
    InvalidLine(&'static str),

    /// Station index is beyond the end of the line
    #[error("station {0} is not on this line")]
    StationOutOfRange(Station),

    /// Ride has zero length or leaves a terminal the wrong way
    #[error("cannot ride from {board} to {alight}")]
    InvalidRide { board: Station, alight: Station },

    /// A boarding pass was used twice
    #[error("station {0} boarded more than once")]
    StationReused(Station),

    /// Walk is malformed (e.g., before the first ride)
    #[error("invalid walk: {0}")]
    InvalidWalk(&'static str),

    /// Walk exceeds the per-transfer walking budget
    #[error("walk from {from} to {to} exceeds the budget of {budget} sections")]
    WalkTooLong {
        from: Station,
        to: Station,
        budget: u32,
    },

    /// Consecutive steps don't connect
    #[error("stations {0} and {1} are not connected")]
    Disconnected(Station, Station),

    /// Some stations were never boarded
    #[error("only {boarded} of {required} stations boarded")]
    IncompleteBoarding { boarded: usize, required: usize },

    /// Itinerary has no steps
    #[error("itinerary must have at least one step")]
    EmptyItinerary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let a = Station::parse("A").unwrap();
        let c = Station::parse("C").unwrap();

        let err = DomainError::InvalidLine("a line needs at least one station");
        assert_eq!(err.to_string(), "invalid line: a line needs at least one station");

        let err = DomainError::StationOutOfRange(c);
        assert_eq!(err.to_string(), "station C is not on this line");

        let err = DomainError::InvalidRide { board: a, alight: a };
        assert_eq!(err.to_string(), "cannot ride from A to A");

        let err = DomainError::StationReused(c);
        assert_eq!(err.to_string(), "station C boarded more than once");

        let err = DomainError::WalkTooLong {
            from: a,
            to: c,
            budget: 1,
        };
        assert_eq!(
            err.to_string(),
            "walk from A to C exceeds the budget of 1 sections"
        );

        let err = DomainError::Disconnected(a, c);
        assert_eq!(err.to_string(), "stations A and C are not connected");

        let err = DomainError::IncompleteBoarding {
            boarded: 2,
            required: 7,
        };
        assert_eq!(err.to_string(), "only 2 of 7 stations boarded");

        let err = DomainError::EmptyItinerary;
        assert_eq!(err.to_string(), "itinerary must have at least one step");
    }
}
