//! ResRobot trip-search response DTOs.
//!
//! These types map directly to the `trip` endpoint's JSON. ResRobot omits
//! empty collections entirely and serializes a one-element collection as a
//! bare object, so every collection goes through [`one_or_many`] and every
//! field is optional or defaulted. Code past this module only ever sees
//! `Vec`s.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Response from the `trip` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TripSearchResponse {
    /// Proposed trips, in the order the planner returned them.
    #[serde(rename = "Trip", default, deserialize_with = "one_or_many")]
    pub trips: Vec<RawTrip>,
}

/// One proposed itinerary.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "LegList", default)]
    pub leg_list: Option<LegList>,
}

impl RawTrip {
    /// Build a trip directly from its legs.
    pub fn from_legs(legs: Vec<RawLeg>) -> Self {
        Self {
            leg_list: Some(LegList { legs }),
        }
    }

    /// The trip's legs; empty if the leg list was absent.
    pub fn legs(&self) -> &[RawLeg] {
        self.leg_list
            .as_ref()
            .map(|list| list.legs.as_slice())
            .unwrap_or_default()
    }
}

/// Wrapper around a trip's legs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegList {
    #[serde(rename = "Leg", default, deserialize_with = "one_or_many")]
    pub legs: Vec<RawLeg>,
}

/// One uninterrupted segment of a trip.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawLeg {
    /// Line or service name (e.g. "Länstrafik - Buss 100").
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "Stops", default)]
    pub stop_list: Option<StopList>,

    /// Where and when the leg starts.
    #[serde(rename = "Origin", default)]
    pub origin: Option<LegEndpoint>,

    /// Where and when the leg ends.
    #[serde(rename = "Destination", default)]
    pub destination: Option<LegEndpoint>,
}

impl RawLeg {
    /// The leg's stop events; empty if the stop list was absent or null.
    pub fn stops(&self) -> &[RawStopEvent] {
        self.stop_list
            .as_ref()
            .map(|list| list.stops.as_slice())
            .unwrap_or_default()
    }
}

/// Wrapper around a leg's stop events.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopList {
    #[serde(rename = "Stop", default, deserialize_with = "one_or_many")]
    pub stops: Vec<RawStopEvent>,
}

/// Start or end of a leg.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegEndpoint {
    #[serde(default)]
    pub name: Option<String>,

    /// Date as "YYYY-MM-DD".
    #[serde(default)]
    pub date: Option<String>,

    /// Time as "HH:MM:SS".
    #[serde(default)]
    pub time: Option<String>,
}

/// A single stop's arrival/departure record within a leg.
///
/// The first stop of a leg usually has no arrival fields and the last one
/// no departure fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStopEvent {
    #[serde(default)]
    pub name: Option<String>,

    /// ResRobot stop identifier (e.g. "740000001").
    #[serde(rename = "extId", default)]
    pub ext_id: Option<String>,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lat: Option<f64>,

    #[serde(default, deserialize_with = "lenient_coordinate")]
    pub lon: Option<f64>,

    #[serde(rename = "arrTime", alias = "arrivalTime", default)]
    pub arrival_time: Option<String>,

    #[serde(rename = "arrDate", alias = "arrivalDate", default)]
    pub arrival_date: Option<String>,

    #[serde(rename = "depTime", alias = "departureTime", default)]
    pub departure_time: Option<String>,

    #[serde(rename = "depDate", alias = "departureDate", default)]
    pub departure_date: Option<String>,
}

/// Deserialize a field that may be a list, a bare object, or null.
///
/// An empty object counts as no items.
fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(Value::Object(map)) if map.is_empty() => Vec::new(),
        Some(item) => vec![item],
    };

    items
        .into_iter()
        .map(|item| T::deserialize(item).map_err(D::Error::custom))
        .collect()
}

/// Deserialize a coordinate sent as a number or a numeric string.
///
/// Anything else is treated as missing.
fn lenient_coordinate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(text)) => text.trim().parse().ok(),
        _ => None,
    })
}
