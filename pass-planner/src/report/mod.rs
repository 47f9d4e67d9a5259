//! Plain-text reports of search results.
//!
//! Renders each plan as a numbered list of steps with running ride and walk
//! totals. Infeasible results get their own message rather than totals.

use std::fmt::Write;

use crate::domain::{Itinerary, Ride, Walk};
use crate::planner::SearchResult;

/// A step annotated with running totals, for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView {
    /// 1-based position in the itinerary.
    pub number: usize,
    /// Walk taken before boarding, if any.
    pub walk: Option<Walk>,
    /// The ride.
    pub ride: Ride,
    /// Sections ridden up to and including this step.
    pub cumulative_ride: u32,
    /// Sections walked up to and including this step.
    pub cumulative_walk: u32,
}

/// Annotate an itinerary's steps with running totals.
pub fn step_views(itinerary: &Itinerary) -> Vec<StepView> {
    let mut cumulative_ride = 0;
    let mut cumulative_walk = 0;

    itinerary
        .steps()
        .iter()
        .enumerate()
        .map(|(i, step)| {
            cumulative_ride += step.ride_sections();
            cumulative_walk += step.walk_sections();
            StepView {
                number: i + 1,
                walk: step.walk,
                ride: step.ride,
                cumulative_ride,
                cumulative_walk,
            }
        })
        .collect()
}

/// Render one walk budget's result.
///
/// # Examples
///
/// ```
/// use pass_planner::domain::Line;
/// use pass_planner::planner::Planner;
/// use pass_planner::report::render_result;
///
/// let line = Line::new(2).unwrap();
/// let result = Planner::new(&line).solve(0).unwrap();
/// let text = render_result(&result);
///
/// assert!(text.contains("Maximum number of riding sections = 2"));
/// assert!(text.contains("Step 2: Board at B, ride for 1 sections and disembark at A."));
/// ```
pub fn render_result(result: &SearchResult) -> String {
    let mut out = String::new();
    let budget = result.walk_budget;

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "When x = {budget} (at most {budget} sections of each walk):"
    );

    let Some(plan) = &result.plan else {
        let _ = writeln!(out, "  No valid travel itinerary found.");
        return out;
    };

    let _ = writeln!(
        out,
        "  Best result: Maximum number of riding sections = {}, Minimum number of walking sections = {}",
        plan.total_ride(),
        plan.total_walk()
    );
    let _ = writeln!(out, "  Plan details:");

    for view in step_views(plan) {
        let _ = write!(out, "    Step {}: ", view.number);
        if let Some(walk) = view.walk {
            let _ = write!(
                out,
                "Walk from {} for {} sections to {}. Then, ",
                walk.from,
                walk.sections(),
                walk.to
            );
        }
        let _ = writeln!(
            out,
            "Board at {}, ride for {} sections and disembark at {}.",
            view.ride.board(),
            view.ride.sections(),
            view.ride.alight()
        );
        let _ = writeln!(
            out,
            "           (Cumulative ride: {}, Cumulative walk: {})",
            view.cumulative_ride, view.cumulative_walk
        );
    }

    out
}

/// Render a sweep of results, separated by rules.
pub fn render_sweep(results: &[SearchResult]) -> String {
    let rule = "-".repeat(50);
    results
        .iter()
        .map(|r| format!("{}{rule}\n", render_result(r)))
        .collect()
}
