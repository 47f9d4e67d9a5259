//! Itinerary planner using memoized search.
//!
//! This module implements the core planning algorithm that answers:
//! "With one boarding pass per station, how do I ride the most sections?"
//!
//! The search explores every order of spending the passes, memoizing the
//! best continuation from each (location, spent passes) state, and prefers
//! less walking among itineraries that ride equally far.

mod config;
mod rank;
mod search;
mod sweep;

pub use config::SearchConfig;
pub use rank::Score;
pub use search::{Planner, SearchError, SearchResult};
pub use sweep::sweep;
