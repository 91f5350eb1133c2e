//! ResRobot journey-planning API client.
//!
//! This module provides an HTTP client for Trafiklab's ResRobot v2.1 API
//! and the response types for its `trip` endpoint.
//!
//! Key characteristics of ResRobot:
//! - Stops are identified by numeric ids such as `740000001`
//! - Times are "HH:MM:SS" and dates "YYYY-MM-DD" (Swedish local time)
//! - Single-element collections are sent as a bare object, not a list

mod client;
mod error;
mod mock;
mod source;
mod types;

pub use client::{ResRobotClient, ResRobotConfig};
pub use error::ResRobotError;
pub use mock::MockTripSource;
pub use source::TripSource;
pub use types::{LegEndpoint, LegList, RawLeg, RawStopEvent, RawTrip, StopList, TripSearchResponse};
