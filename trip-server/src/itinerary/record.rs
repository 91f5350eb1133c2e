//! Flattened stop records.

use serde::Serialize;

use crate::resrobot::{RawStopEvent, RawTrip};

use super::field::{Field, resolve};

/// One stop event of a trip, flattened to a fixed shape.
///
/// Every column is always present; missing source values are
/// [`Field::NotAvailable`]. Serialized keys follow the upstream naming so the
/// records line up with raw API output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopRecord {
    pub name: Field<String>,

    #[serde(rename = "extId")]
    pub ext_id: Field<String>,

    pub lat: Field<f64>,

    pub lon: Field<f64>,

    #[serde(rename = "depTime")]
    pub departure_time: Field<String>,

    #[serde(rename = "depDate")]
    pub departure_date: Field<String>,

    #[serde(rename = "arrTime")]
    pub arrival_time: Field<String>,

    #[serde(rename = "arrDate")]
    pub arrival_date: Field<String>,

    /// Arrival time, else departure time.
    pub time: Field<String>,

    /// Arrival date, else departure date.
    pub date: Field<String>,

    /// Name of the leg this stop belongs to.
    pub line: Field<String>,
}

impl StopRecord {
    /// Flatten a raw stop event belonging to the leg named `line`.
    pub fn from_stop(stop: &RawStopEvent, line: Option<&str>) -> Self {
        Self {
            name: stop.name.clone().into(),
            ext_id: stop.ext_id.clone().into(),
            lat: stop.lat.into(),
            lon: stop.lon.into(),
            departure_time: stop.departure_time.clone().into(),
            departure_date: stop.departure_date.clone().into(),
            arrival_time: stop.arrival_time.clone().into(),
            arrival_date: stop.arrival_date.clone().into(),
            time: resolve(stop.arrival_time.as_ref(), stop.departure_time.as_ref()),
            date: resolve(stop.arrival_date.as_ref(), stop.departure_date.as_ref()),
            line: line.map(str::to_string).into(),
        }
    }

    /// Returns true if the resolved date contains `day` ("YYYY-MM-DD").
    pub fn is_on(&self, day: &str) -> bool {
        self.date.as_present().is_some_and(|date| date.contains(day))
    }
}

/// Flatten every stop event of `trip`, in leg-then-stop order.
///
/// The order is the visiting order of the itinerary; transfer points sit at
/// leg boundaries.
pub fn flatten(trip: &RawTrip) -> Vec<StopRecord> {
    trip.legs()
        .iter()
        .flat_map(|leg| {
            let line = leg.name.as_deref();
            leg.stops()
                .iter()
                .map(move |stop| StopRecord::from_stop(stop, line))
        })
        .collect()
}
