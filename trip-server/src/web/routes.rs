//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::itinerary::{ItineraryError, TripMap, TripPlanner};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/trips", get(list_trips))
        .route("/trips/:index", get(trip_detail))
        .route("/trips/:index/map", get(trip_map))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn planner_for(state: &AppState, query: &TripQuery) -> TripPlanner {
    TripPlanner::fetch(state.source.as_ref(), query.origin, query.destination).await
}

/// Today's trips and metrics for every trip.
async fn list_trips(
    State(state): State<AppState>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripsResponse>, AppError> {
    let planner = planner_for(&state, &query).await;

    Ok(Json(TripsResponse {
        summaries: planner.summaries()?,
        trips_today: planner.trips_today(),
    }))
}

/// One trip's stop records and metrics.
async fn trip_detail(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripDetailResponse>, AppError> {
    let planner = planner_for(&state, &query).await;

    let summary = planner.summary(index)?.ok_or_else(|| AppError::NotFound {
        message: format!("No trip {index} ({} trips found)", planner.len()),
    })?;

    Ok(Json(TripDetailResponse {
        index,
        stops: planner.flatten_trip(index),
        summary,
    }))
}

/// Map markers for one trip.
async fn trip_map(
    State(state): State<AppState>,
    Path(index): Path<usize>,
    Query(query): Query<TripQuery>,
) -> Result<Json<TripMap>, AppError> {
    let planner = planner_for(&state, &query).await;

    planner
        .map_for_trip(index)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("No stops data found for trip {index}"),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
    BadGateway { message: String },
}

impl From<ItineraryError> for AppError {
    fn from(e: ItineraryError) -> Self {
        AppError::BadGateway {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::BadGateway { message } => (StatusCode::BAD_GATEWAY, message),
        };

        warn!(status = status.as_u16(), %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
