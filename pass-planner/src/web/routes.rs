//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, warn};

use crate::cache::PlanError;
use crate::domain::Line;
use crate::planner::SearchConfig;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/plan", get(plan))
        .route("/sweep", get(sweep_plans))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan the best itinerary for one walk budget.
async fn plan(
    State(state): State<AppState>,
    Query(req): Query<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let line = resolve_line(&state.config, req.stations)?;
    check_walk_budget(&state.config, req.walk_budget)?;

    let result = state.planner.solve(line, req.walk_budget).await?;

    Ok(Json(PlanResponse::from_result(line.station_count(), &result)))
}

/// Plan every walk budget from 0 up to the requested maximum.
async fn sweep_plans(
    State(state): State<AppState>,
    Query(req): Query<SweepRequest>,
) -> Result<Json<SweepResponse>, AppError> {
    let line = resolve_line(&state.config, req.stations)?;
    let max_walk_budget = req.max_walk_budget.unwrap_or(state.config.max_walk_budget);
    check_walk_budget(&state.config, max_walk_budget)?;

    let results = state.planner.sweep(line, 0..=max_walk_budget).await?;

    let plans = results
        .iter()
        .map(|r| PlanResponse::from_result(line.station_count(), r))
        .collect();

    Ok(Json(SweepResponse {
        stations: line.station_count(),
        plans,
    }))
}

/// Build the requested line, enforcing the per-request size limit.
fn resolve_line(config: &SearchConfig, stations: Option<usize>) -> Result<Line, AppError> {
    let count = stations.unwrap_or(config.station_count);
    if count > config.station_limit {
        return Err(AppError::BadRequest {
            message: format!(
                "Too many stations: {count} (at most {} per request)",
                config.station_limit
            ),
        });
    }

    Line::new(count).map_err(|e| AppError::BadRequest {
        message: e.to_string(),
    })
}

fn check_walk_budget(config: &SearchConfig, walk_budget: u32) -> Result<(), AppError> {
    if walk_budget > config.walk_budget_limit {
        return Err(AppError::BadRequest {
            message: format!(
                "Walk budget too large: {walk_budget} (at most {})",
                config.walk_budget_limit
            ),
        });
    }
    Ok(())
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<Arc<PlanError>> for AppError {
    fn from(e: Arc<PlanError>) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => {
                warn!(%message, "bad request");
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::Internal { message } => {
                error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
