//! Station index types.

use std::fmt;

use super::MAX_STATIONS;

/// Error returned when building or parsing an invalid station.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A station on the line, identified by its position from terminal A.
///
/// Indices are bounded by [`MAX_STATIONS`], so any `Station` fits in a
/// [`StationSet`](super::StationSet). Whether the index lies on a particular
/// line is checked by [`Line`](super::Line).
///
/// Stations display as letters: index 0 is `A`, index 6 is `G`. Lines longer
/// than the alphabet fall back to `S26`, `S27`, ...
///
/// # Examples
///
/// ```
/// use pass_planner::domain::Station;
///
/// let d = Station::parse("D").unwrap();
/// assert_eq!(d.index(), 3);
/// assert_eq!(d.to_string(), "D");
///
/// assert!(Station::parse("d").is_err());
/// assert!(Station::new(32).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(u8);

impl Station {
    /// Build a station from its index.
    pub fn new(index: usize) -> Result<Self, InvalidStation> {
        if index >= MAX_STATIONS {
            return Err(InvalidStation {
                reason: "index exceeds the maximum line length",
            });
        }
        Ok(Station(index as u8))
    }

    /// Parse a station from its display label (`A`-`Z` or `S<index>`).
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        let bytes = s.as_bytes();

        if let [b] = bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStation {
                    reason: "letter must be uppercase A-Z",
                });
            }
            return Station::new(usize::from(b - b'A'));
        }

        let digits = s.strip_prefix('S').ok_or(InvalidStation {
            reason: "must be a single letter or S<index>",
        })?;
        let index: usize = digits.parse().map_err(|_| InvalidStation {
            reason: "index after S must be a number",
        })?;
        if index < 26 {
            return Err(InvalidStation {
                reason: "stations below 26 are written as letters",
            });
        }
        Station::new(index)
    }

    /// Position of this station counted from terminal A.
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Number of sections between two stations.
    pub fn distance(self, other: Station) -> u32 {
        u32::from(self.0.abs_diff(other.0))
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({self})")
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 26 {
            write!(f, "{}", char::from(b'A' + self.0))
        } else {
            write!(f, "S{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn st(i: usize) -> Station {
        Station::new(i).unwrap()
    }

    #[test]
    fn new_within_bounds() {
        assert!(Station::new(0).is_ok());
        assert!(Station::new(6).is_ok());
        assert!(Station::new(MAX_STATIONS - 1).is_ok());
    }

    #[test]
    fn new_rejects_out_of_bounds() {
        assert!(Station::new(MAX_STATIONS).is_err());
        assert!(Station::new(usize::MAX).is_err());
    }

    #[test]
    fn parse_letters() {
        assert_eq!(Station::parse("A").unwrap().index(), 0);
        assert_eq!(Station::parse("G").unwrap().index(), 6);
        assert_eq!(Station::parse("S").unwrap().index(), 18);
        assert_eq!(Station::parse("Z").unwrap().index(), 25);
    }

    #[test]
    fn parse_long_form() {
        assert_eq!(Station::parse("S26").unwrap().index(), 26);
        assert_eq!(Station::parse("S31").unwrap().index(), 31);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Station::parse("").is_err());
        assert!(Station::parse("a").is_err());
        assert!(Station::parse("AB").is_err());
        assert!(Station::parse("S2x").is_err());
        assert!(Station::parse("S3").is_err());
        assert!(Station::parse("S32").is_err());
        assert!(Station::parse("1").is_err());
    }

    #[test]
    fn distance_is_symmetric() {
        assert_eq!(st(0).distance(st(6)), 6);
        assert_eq!(st(6).distance(st(0)), 6);
        assert_eq!(st(3).distance(st(3)), 0);
    }

    #[test]
    fn display() {
        assert_eq!(st(0).to_string(), "A");
        assert_eq!(st(6).to_string(), "G");
        assert_eq!(st(27).to_string(), "S27");
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", st(3)), "Station(D)");
    }

    #[test]
    fn ordering_follows_index() {
        assert!(st(1) < st(2));
        assert!(st(6) > st(0));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Display then parse returns the same station
        #[test]
        fn label_roundtrip(i in 0..MAX_STATIONS) {
            let station = Station::new(i).unwrap();
            let parsed = Station::parse(&station.to_string()).unwrap();
            prop_assert_eq!(parsed, station);
        }

        /// Distance is the absolute index difference
        #[test]
        fn distance_matches_indices(a in 0..MAX_STATIONS, b in 0..MAX_STATIONS) {
            let d = Station::new(a).unwrap().distance(Station::new(b).unwrap());
            prop_assert_eq!(d as usize, a.abs_diff(b));
        }
    }
}
