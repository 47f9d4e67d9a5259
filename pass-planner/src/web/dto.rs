//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::planner::SearchResult;
use crate::report::{StepView, step_views};

/// Request to plan a single walk budget.
#[derive(Debug, Deserialize)]
pub struct PlanRequest {
    /// Maximum sections per walk
    pub walk_budget: u32,

    /// Number of stations on the line (defaults to the configured line)
    pub stations: Option<usize>,
}

/// Request to plan every walk budget from 0 upwards.
#[derive(Debug, Deserialize)]
pub struct SweepRequest {
    /// Largest walk budget to plan (defaults to the configured sweep)
    pub max_walk_budget: Option<u32>,

    /// Number of stations on the line (defaults to the configured line)
    pub stations: Option<usize>,
}

/// A step of a planned itinerary.
#[derive(Debug, Serialize)]
pub struct StepResult {
    /// Station the walk starts from, if there is a walk
    pub walk_from: Option<String>,

    /// Station the walk ends at, if there is a walk
    pub walk_to: Option<String>,

    /// Sections walked (0 without a walk)
    pub walk_sections: u32,

    /// Boarding station
    pub board: String,

    /// Alighting station
    pub alight: String,

    /// Sections ridden
    pub ride_sections: u32,

    /// Sections ridden so far, including this step
    pub cumulative_ride: u32,

    /// Sections walked so far, including this step
    pub cumulative_walk: u32,
}

/// Response for a single walk budget.
#[derive(Debug, Serialize)]
pub struct PlanResponse {
    /// Walk budget the plan was computed for
    pub walk_budget: u32,

    /// Number of stations on the line
    pub stations: usize,

    /// Whether any itinerary spends every pass
    pub feasible: bool,

    /// Total sections ridden (absent when infeasible)
    pub total_ride: Option<u32>,

    /// Total sections walked (absent when infeasible)
    pub total_walk: Option<u32>,

    /// Number of search states evaluated
    pub states_explored: usize,

    /// Itinerary steps in order (empty when infeasible)
    pub steps: Vec<StepResult>,
}

/// Response for a sweep of walk budgets.
#[derive(Debug, Serialize)]
pub struct SweepResponse {
    /// Number of stations on the line
    pub stations: usize,

    /// One plan per walk budget, ascending
    pub plans: Vec<PlanResponse>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl StepResult {
    /// Create from an annotated step.
    pub fn from_view(view: &StepView) -> Self {
        Self {
            walk_from: view.walk.map(|w| w.from.to_string()),
            walk_to: view.walk.map(|w| w.to.to_string()),
            walk_sections: view.walk.map_or(0, |w| w.sections()),
            board: view.ride.board().to_string(),
            alight: view.ride.alight().to_string(),
            ride_sections: view.ride.sections(),
            cumulative_ride: view.cumulative_ride,
            cumulative_walk: view.cumulative_walk,
        }
    }
}

impl PlanResponse {
    /// Create from a search result on a line with `stations` stations.
    pub fn from_result(stations: usize, result: &SearchResult) -> Self {
        let steps: Vec<StepResult> = result
            .plan
            .as_ref()
            .map(|plan| step_views(plan).iter().map(StepResult::from_view).collect())
            .unwrap_or_default();

        Self {
            walk_budget: result.walk_budget,
            stations,
            feasible: result.is_feasible(),
            total_ride: result.total_ride(),
            total_walk: result.total_walk(),
            states_explored: result.states_explored,
            steps,
        }
    }
}
