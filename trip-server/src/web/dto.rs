//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::itinerary::{StopRecord, TripSummary};

/// Origin and destination of a trip search.
#[derive(Debug, Deserialize)]
pub struct TripQuery {
    /// ResRobot id of the origin stop
    pub origin: u64,

    /// ResRobot id of the destination stop
    pub destination: u64,
}

/// Response for `GET /trips`.
#[derive(Debug, Serialize)]
pub struct TripsResponse {
    /// Flattened trips with at least one stop today, in upstream order
    pub trips_today: Vec<Vec<StopRecord>>,

    /// Metrics for every trip
    pub summaries: Vec<TripSummary>,
}

/// Response for `GET /trips/{index}`.
#[derive(Debug, Serialize)]
pub struct TripDetailResponse {
    pub index: usize,

    /// Stop records in visiting order
    pub stops: Vec<StopRecord>,

    pub summary: TripSummary,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
