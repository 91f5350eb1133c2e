//! Total travel time of a trip.

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Serialize, Serializer};

use crate::resrobot::{LegEndpoint, RawTrip};

use super::error::ItineraryError;

/// Format of a leg endpoint once date and time are joined.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Elapsed time of a trip, or the reason it could not be computed.
///
/// Displays as `H:MM:SS` or as a "no data" message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalDuration {
    /// Time from the first leg's origin to the last leg's destination.
    Elapsed(Duration),
    /// There was no trip to measure.
    NoTrips,
    /// The trip had no legs, or its end points carried no date/time.
    NoTimeData,
}

impl TotalDuration {
    /// Measure `trip` from its first leg's origin to its last leg's
    /// destination.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either end point carries a date and time that do not
    /// parse as "YYYY-MM-DD HH:MM:SS".
    pub fn of_trip(trip: &RawTrip) -> Result<Self, ItineraryError> {
        let legs = trip.legs();
        let (Some(first), Some(last)) = (legs.first(), legs.last()) else {
            return Ok(TotalDuration::NoTimeData);
        };

        let (Some(start), Some(end)) = (
            first.origin.as_ref().and_then(timestamp_text),
            last.destination.as_ref().and_then(timestamp_text),
        ) else {
            return Ok(TotalDuration::NoTimeData);
        };

        let start = parse_timestamp(start)?;
        let end = parse_timestamp(end)?;

        Ok(TotalDuration::Elapsed(end.signed_duration_since(start)))
    }
}

impl fmt::Display for TotalDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TotalDuration::Elapsed(d) => f.write_str(&format_hms(*d)),
            TotalDuration::NoTrips => f.write_str("No trips found"),
            TotalDuration::NoTimeData => f.write_str("No time data available"),
        }
    }
}

impl Serialize for TotalDuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// "{date} {time}" of an endpoint, if both parts are present.
fn timestamp_text(endpoint: &LegEndpoint) -> Option<String> {
    let date = endpoint.date.as_deref()?;
    let time = endpoint.time.as_deref()?;
    Some(format!("{date} {time}"))
}

fn parse_timestamp(text: String) -> Result<NaiveDateTime, ItineraryError> {
    NaiveDateTime::parse_from_str(&text, TIMESTAMP_FORMAT)
        .map_err(|source| ItineraryError::InvalidTimestamp { value: text, source })
}

/// Format as `H:MM:SS`, dropping sub-second precision.
///
/// Hours are not folded into days. Negative durations get a leading `-`.
pub fn format_hms(duration: Duration) -> String {
    let secs = duration.num_seconds();
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    format!(
        "{sign}{}:{:02}:{:02}",
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60
    )
}
