//! Walk budget sweeps.

use std::ops::RangeInclusive;

use tracing::info;

use crate::domain::Line;

use super::search::{Planner, SearchError, SearchResult};

/// Solve the line once per walk budget, in ascending budget order.
///
/// Every budget gets its own search (and memo table); nothing is shared
/// between budgets.
pub fn sweep(line: &Line, budgets: RangeInclusive<u32>) -> Result<Vec<SearchResult>, SearchError> {
    let planner = Planner::new(line);

    budgets
        .map(|walk_budget| {
            let result = planner.solve(walk_budget)?;
            info!(
                walk_budget,
                feasible = result.is_feasible(),
                "solved walk budget"
            );
            Ok(result)
        })
        .collect()
}
