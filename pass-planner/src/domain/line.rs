//! The railway line and its boarding rules.

use super::{DomainError, Station, StationSet};

/// Number of stations on the default line (A to G).
pub const DEFAULT_STATION_COUNT: usize = 7;

/// A linear railway line with terminals at both ends.
///
/// Trains run in both directions and stop everywhere. Passengers boarding
/// at an interior station may ride either way; boarding at a terminal
/// means riding away from it, since everyone must leave the train there.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::{Line, Station};
///
/// let line = Line::new(7).unwrap();
/// let a = Station::parse("A").unwrap();
/// let d = Station::parse("D").unwrap();
/// let g = Station::parse("G").unwrap();
///
/// assert!(line.can_ride(a, d));
/// assert!(line.can_ride(d, a));
/// assert!(!line.can_ride(g, g));
/// assert!(line.can_ride(g, a));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    station_count: usize,
    terminal_a: Station,
    terminal_g: Station,
}

impl Line {
    /// Create a line with `station_count` stations.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the line has no stations or more than
    /// [`MAX_STATIONS`](super::MAX_STATIONS).
    pub fn new(station_count: usize) -> Result<Self, DomainError> {
        if station_count == 0 {
            return Err(DomainError::InvalidLine("a line needs at least one station"));
        }
        let too_long = |_| DomainError::InvalidLine("too many stations for a boarding pass");
        let terminal_a = Station::new(0).map_err(too_long)?;
        let terminal_g = Station::new(station_count - 1).map_err(too_long)?;

        Ok(Self {
            station_count,
            terminal_a,
            terminal_g,
        })
    }

    /// Number of stations on the line.
    pub fn station_count(&self) -> usize {
        self.station_count
    }

    /// All stations from terminal A to terminal G.
    pub fn stations(&self) -> impl Iterator<Item = Station> + use<> {
        (0..self.station_count).filter_map(|i| Station::new(i).ok())
    }

    /// Check whether a station lies on this line.
    pub fn contains(&self, station: Station) -> bool {
        station.index() < self.station_count
    }

    /// The first terminal ("A").
    pub fn terminal_a(&self) -> Station {
        self.terminal_a
    }

    /// The last terminal ("G" on the default line).
    pub fn terminal_g(&self) -> Station {
        self.terminal_g
    }

    /// Check whether a station is one of the two terminals.
    pub fn is_terminal(&self, station: Station) -> bool {
        station == self.terminal_a || station == self.terminal_g
    }

    /// Every boarding pass on this line.
    pub fn all_stations(&self) -> StationSet {
        StationSet::full(self.station_count)
    }

    /// Check whether a passenger may board at `board` and ride to `alight`.
    ///
    /// A ride must cover at least one section. From terminal A the train
    /// must head towards G, and from terminal G towards A. On a single-station
    /// line no ride is possible.
    pub fn can_ride(&self, board: Station, alight: Station) -> bool {
        if board == alight || !self.contains(board) || !self.contains(alight) {
            return false;
        }

        if !self.is_terminal(board) {
            return true;
        }

        let leaves_a = board != self.terminal_a || alight > board;
        let leaves_g = board != self.terminal_g || alight < board;
        leaves_a && leaves_g
    }
}

impl Default for Line {
    fn default() -> Self {
        Line::new(DEFAULT_STATION_COUNT).expect("default station count is valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MAX_STATIONS;

    fn st(i: usize) -> Station {
        Station::new(i).unwrap()
    }

    #[test]
    fn default_line_has_seven_stations() {
        let line = Line::default();
        assert_eq!(line.station_count(), 7);
        assert_eq!(line.terminal_a(), st(0));
        assert_eq!(line.terminal_g(), st(6));
    }

    #[test]
    fn rejects_empty_and_oversized() {
        assert!(matches!(Line::new(0), Err(DomainError::InvalidLine(_))));
        assert!(matches!(
            Line::new(MAX_STATIONS + 1),
            Err(DomainError::InvalidLine(_))
        ));
        assert!(Line::new(MAX_STATIONS).is_ok());
    }

    #[test]
    fn station_lookup() {
        let line = Line::default();
        assert!(line.contains(st(0)));
        assert!(line.contains(st(6)));
        assert!(!line.contains(st(7)));
    }

    #[test]
    fn stations_in_order() {
        let line = Line::new(4).unwrap();
        let labels: Vec<String> = line.stations().map(|s| s.to_string()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn terminals() {
        let line = Line::default();
        assert!(line.is_terminal(st(0)));
        assert!(line.is_terminal(st(6)));
        for i in 1..6 {
            assert!(!line.is_terminal(st(i)));
        }
    }

    #[test]
    fn interior_rides_either_way() {
        let line = Line::default();
        assert!(line.can_ride(st(3), st(0)));
        assert!(line.can_ride(st(3), st(6)));
        assert!(line.can_ride(st(1), st(2)));
        assert!(line.can_ride(st(5), st(4)));
    }

    #[test]
    fn terminal_a_must_head_to_g() {
        let line = Line::default();
        for i in 1..7 {
            assert!(line.can_ride(st(0), st(i)));
        }
    }

    #[test]
    fn terminal_g_must_head_to_a() {
        let line = Line::default();
        for i in 0..6 {
            assert!(line.can_ride(st(6), st(i)));
        }
    }

    #[test]
    fn no_zero_length_ride() {
        let line = Line::default();
        for station in line.stations() {
            assert!(!line.can_ride(station, station));
        }
    }

    #[test]
    fn no_ride_off_the_line() {
        let line = Line::default();
        assert!(!line.can_ride(st(3), st(7)));
        assert!(!line.can_ride(st(8), st(3)));
    }

    #[test]
    fn single_station_line_has_no_rides() {
        let line = Line::new(1).unwrap();
        assert_eq!(line.terminal_a(), line.terminal_g());
        assert!(!line.can_ride(st(0), st(0)));
    }

    #[test]
    fn all_stations_is_full() {
        let line = Line::default();
        assert!(line.all_stations().is_full(7));
        assert_eq!(line.all_stations().len(), 7);
    }
}
