//! Web layer for the pass planner.
//!
//! Provides JSON endpoints for planning a single walk budget or a sweep.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
