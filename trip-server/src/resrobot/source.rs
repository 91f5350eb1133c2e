//! Abstraction over where trip-search responses come from.

use futures::future::BoxFuture;

use super::error::ResRobotError;
use super::types::TripSearchResponse;

/// Trait for providing trip-search responses.
///
/// This abstraction lets the web layer and the itinerary planner run against
/// the live API, a mock file, or in-memory test data.
pub trait TripSource: Send + Sync {
    /// Search for trips between two stops, identified by ResRobot stop id.
    ///
    /// Makes at most one upstream attempt.
    fn trips(
        &self,
        origin: u64,
        destination: u64,
    ) -> BoxFuture<'_, Result<TripSearchResponse, ResRobotError>>;
}
