//! Search configuration for the pass planner.

use std::ops::RangeInclusive;

use tracing::warn;

use crate::domain::{DEFAULT_STATION_COUNT, DomainError, Line};

/// Configuration parameters for itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Number of stations on the line.
    pub station_count: usize,

    /// Largest walk budget covered by a sweep.
    /// Sweeps run every budget from 0 up to and including this value.
    pub max_walk_budget: u32,

    /// Largest line a single HTTP request may ask for.
    /// The search state space doubles with every station.
    pub station_limit: usize,

    /// Largest walk budget a single HTTP request may ask for.
    pub walk_budget_limit: u32,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        station_count: usize,
        max_walk_budget: u32,
        station_limit: usize,
        walk_budget_limit: u32,
    ) -> Self {
        Self {
            station_count,
            max_walk_budget,
            station_limit,
            walk_budget_limit,
        }
    }

    /// Returns the configured line.
    pub fn line(&self) -> Result<Line, DomainError> {
        Line::new(self.station_count)
    }

    /// Returns the walk budgets covered by a sweep.
    pub fn sweep_budgets(&self) -> RangeInclusive<u32> {
        0..=self.max_walk_budget
    }

    /// Apply operator overrides for the default line and sweep.
    ///
    /// An override outside the request limits is logged and ignored, so the
    /// configured line is always one a request could ask for.
    pub fn with_overrides(
        mut self,
        station_count: Option<usize>,
        max_walk_budget: Option<u32>,
    ) -> Self {
        if let Some(count) = station_count {
            match Line::new(count) {
                Ok(_) if count <= self.station_limit => self.station_count = count,
                Ok(_) => warn!(
                    station_count = count,
                    limit = self.station_limit,
                    "station count above request limit, using default"
                ),
                Err(e) => warn!(
                    station_count = count,
                    error = %e,
                    "unusable station count, using default"
                ),
            }
        }

        if let Some(budget) = max_walk_budget {
            if budget <= self.walk_budget_limit {
                self.max_walk_budget = budget;
            } else {
                warn!(
                    max_walk_budget = budget,
                    limit = self.walk_budget_limit,
                    "walk budget above request limit, using default"
                );
            }
        }

        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            station_count: DEFAULT_STATION_COUNT,
            max_walk_budget: 3,
            station_limit: 12,
            walk_budget_limit: 31,
        }
    }
}
