//! Compact set of stations.

use std::fmt;

use super::{MAX_STATIONS, Station};

/// A set of stations stored as a bitmask.
///
/// Used to track which stations have already been used as boarding points.
/// Sets are values: [`with`](Self::with) returns a new set and never removes
/// members, which keeps search states hashable and immutable.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StationSet(u32);

impl StationSet {
    /// The empty set.
    pub const fn empty() -> Self {
        StationSet(0)
    }

    /// The set of the first `count` stations.
    ///
    /// `count` is clamped to [`MAX_STATIONS`].
    pub fn full(count: usize) -> Self {
        if count >= MAX_STATIONS {
            StationSet(u32::MAX)
        } else {
            StationSet((1u32 << count) - 1)
        }
    }

    /// A set holding a single station.
    pub fn single(station: Station) -> Self {
        Self::empty().with(station)
    }

    /// Returns a copy of this set with `station` added.
    pub fn with(self, station: Station) -> Self {
        StationSet(self.0 | Self::bit(station))
    }

    /// Check whether `station` is in the set.
    pub fn contains(self, station: Station) -> bool {
        self.0 & Self::bit(station) != 0
    }

    /// Number of stations in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no members.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns true if every one of the first `count` stations is present.
    pub fn is_full(self, count: usize) -> bool {
        let full = Self::full(count).0;
        self.0 & full == full
    }

    /// Iterate members in ascending index order.
    pub fn iter(self) -> impl Iterator<Item = Station> {
        (0..MAX_STATIONS)
            .filter(move |i| self.0 & (1u32 << i) != 0)
            .filter_map(|i| Station::new(i).ok())
    }

    fn bit(station: Station) -> u32 {
        1u32 << station.index()
    }
}

impl fmt::Debug for StationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Station> for StationSet {
    fn from_iter<I: IntoIterator<Item = Station>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}
