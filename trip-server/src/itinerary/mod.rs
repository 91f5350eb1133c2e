//! Itinerary normalization and aggregation.
//!
//! Turns a raw trip-search response into flat, fixed-shape stop records and
//! per-trip metrics:
//!
//! - [`TripPlanner::flatten_trip`] - one record per stop event, in visiting
//!   order
//! - [`TripPlanner::trips_today`] - flattened trips with a stop today
//! - [`TripPlanner::stop_count`], [`TripPlanner::transfer_count`],
//!   [`TripPlanner::total_duration`] - scalar metrics
//!
//! Missing upstream data never fails a query. Only malformed timestamps
//! surface as [`ItineraryError`].

mod duration;
mod error;
mod field;
mod map;
mod planner;
mod record;

pub use duration::{TotalDuration, format_hms};
pub use error::ItineraryError;
pub use field::{Field, NOT_AVAILABLE, resolve};
pub use map::{LatLon, MapMarker, TripMap};
pub use planner::{TripPlanner, TripSummary};
pub use record::{StopRecord, flatten};
