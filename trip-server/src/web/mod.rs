//! Web layer for the trip server.
//!
//! Provides JSON endpoints exposing normalized itineraries and trip metrics.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
