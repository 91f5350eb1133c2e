//! Map markers for a trip's stops.
//!
//! Only the data a map view needs; drawing it is up to the client.

use serde::Serialize;

use crate::resrobot::RawTrip;

use super::field::Field;

/// Name used for a stop without one.
const UNKNOWN_STOP: &str = "Unknown";

/// A point to plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// One stop marker with its popup details.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub name: String,
    pub position: LatLon,
    pub arrival_time: Field<String>,
    pub departure_time: Field<String>,
}

/// Markers for every stop of a trip, plus where to center the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripMap {
    /// Mean position of all markers.
    pub center: LatLon,
    /// Markers in visiting order.
    pub markers: Vec<MapMarker>,
}

impl TripMap {
    /// Build the map for `trip`.
    ///
    /// Returns `None` if the trip has no stop events. Stops without
    /// coordinates are placed at 0.0.
    pub fn from_trip(trip: &RawTrip) -> Option<Self> {
        let markers: Vec<MapMarker> = trip
            .legs()
            .iter()
            .flat_map(|leg| leg.stops())
            .map(|stop| MapMarker {
                name: stop
                    .name
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_STOP.to_string()),
                position: LatLon {
                    lat: stop.lat.unwrap_or(0.0),
                    lon: stop.lon.unwrap_or(0.0),
                },
                arrival_time: stop.arrival_time.clone().into(),
                departure_time: stop.departure_time.clone().into(),
            })
            .collect();

        if markers.is_empty() {
            return None;
        }

        let n = markers.len() as f64;
        let center = LatLon {
            lat: markers.iter().map(|m| m.position.lat).sum::<f64>() / n,
            lon: markers.iter().map(|m| m.position.lon).sum::<f64>() / n,
        };

        Some(Self { center, markers })
    }
}
