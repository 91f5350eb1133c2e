//! Query surface over one trip-search response.

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::resrobot::{RawTrip, TripSearchResponse, TripSource};

use super::duration::TotalDuration;
use super::error::ItineraryError;
use super::map::TripMap;
use super::record::{StopRecord, flatten};

/// Per-trip metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    /// Position of the trip in the upstream response.
    pub index: usize,
    pub stop_count: usize,
    pub transfer_count: usize,
    pub total_duration: TotalDuration,
}

/// Normalizes and aggregates the trips of one search.
///
/// Holds an immutable snapshot of the upstream trips. Every query is a pure
/// computation over that snapshot; an out-of-range index or missing data
/// gives an empty or zero result instead of an error.
#[derive(Debug, Clone, Default)]
pub struct TripPlanner {
    trips: Vec<RawTrip>,
}

impl TripPlanner {
    /// Create a planner from a search response, which may be absent.
    pub fn new(response: Option<TripSearchResponse>) -> Self {
        Self::from_trips(response.map(|r| r.trips).unwrap_or_default())
    }

    /// Create a planner from already-extracted trips.
    pub fn from_trips(trips: Vec<RawTrip>) -> Self {
        Self { trips }
    }

    /// Fetch trips between two stops and build a planner over them.
    ///
    /// A failed fetch is logged and gives an empty planner.
    pub async fn fetch<S>(source: &S, origin: u64, destination: u64) -> Self
    where
        S: TripSource + ?Sized,
    {
        match source.trips(origin, destination).await {
            Ok(response) => {
                debug!(
                    origin,
                    destination,
                    trips = response.trips.len(),
                    "fetched trips"
                );
                Self::new(Some(response))
            }
            Err(e) => {
                warn!(origin, destination, error = %e, "trip search failed");
                Self::new(None)
            }
        }
    }

    /// Number of trips held.
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    /// Returns true if no trips are held.
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Flatten one trip's stop events into records.
    ///
    /// Empty if the index is out of range or the trip has no stop events.
    pub fn flatten_trip(&self, index: usize) -> Vec<StopRecord> {
        self.trips.get(index).map(flatten).unwrap_or_default()
    }

    /// Flattened trips with at least one stop on `day`, in upstream order.
    ///
    /// Trips without stop events are skipped.
    pub fn trips_on(&self, day: NaiveDate) -> Vec<Vec<StopRecord>> {
        let day = day.format("%Y-%m-%d").to_string();

        self.trips
            .iter()
            .map(flatten)
            .filter(|records| records.iter().any(|r| r.is_on(&day)))
            .collect()
    }

    /// Flattened trips with at least one stop today (local time).
    pub fn trips_today(&self) -> Vec<Vec<StopRecord>> {
        self.trips_on(Local::now().date_naive())
    }

    /// Total number of stop events over all legs of a trip.
    ///
    /// Zero if the index is out of range.
    pub fn stop_count(&self, index: usize) -> usize {
        self.trips
            .get(index)
            .map_or(0, |trip| trip.legs().iter().map(|leg| leg.stops().len()).sum())
    }

    /// Number of changes in a trip: one per leg boundary.
    ///
    /// Zero if the index is out of range.
    pub fn transfer_count(&self, index: usize) -> usize {
        self.trips
            .get(index)
            .map_or(0, |trip| trip.legs().len().saturating_sub(1))
    }

    /// Time from the first leg's origin to the last leg's destination.
    ///
    /// # Errors
    ///
    /// Returns `Err` if an end point's date/time is present but malformed.
    pub fn total_duration(&self, index: usize) -> Result<TotalDuration, ItineraryError> {
        match self.trips.get(index) {
            Some(trip) => TotalDuration::of_trip(trip),
            None => Ok(TotalDuration::NoTrips),
        }
    }

    /// All metrics for one trip, or `None` if the index is out of range.
    pub fn summary(&self, index: usize) -> Result<Option<TripSummary>, ItineraryError> {
        if index >= self.trips.len() {
            return Ok(None);
        }

        Ok(Some(TripSummary {
            index,
            stop_count: self.stop_count(index),
            transfer_count: self.transfer_count(index),
            total_duration: self.total_duration(index)?,
        }))
    }

    /// Metrics for every trip, in upstream order.
    pub fn summaries(&self) -> Result<Vec<TripSummary>, ItineraryError> {
        (0..self.trips.len())
            .filter_map(|i| self.summary(i).transpose())
            .collect()
    }

    /// Map markers for a trip's stops.
    ///
    /// `None` if the index is out of range or the trip has no stop events.
    pub fn map_for_trip(&self, index: usize) -> Option<TripMap> {
        self.trips.get(index).and_then(TripMap::from_trip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::itinerary::Field;
    use crate::resrobot::MockTripSource;
    use crate::resrobot::ResRobotError;
    use futures::FutureExt;
    use futures::future::BoxFuture;
    use serde_json::json;

    fn planner(value: serde_json::Value) -> TripPlanner {
        let response: TripSearchResponse = serde_json::from_value(value).unwrap();
        TripPlanner::new(Some(response))
    }

    fn stop(name: &str, date: &str) -> serde_json::Value {
        json!({"name": name, "depTime": "08:00:00", "depDate": date})
    }

    #[test]
    fn empty_planner_degrades() {
        for p in [TripPlanner::new(None), planner(json!({}))] {
            assert!(p.is_empty());
            assert!(p.flatten_trip(0).is_empty());
            assert_eq!(p.stop_count(0), 0);
            assert_eq!(p.transfer_count(0), 0);
            assert_eq!(p.total_duration(0).unwrap(), TotalDuration::NoTrips);
            assert_eq!(p.total_duration(0).unwrap().to_string(), "No trips found");
            assert!(p.trips_today().is_empty());
            assert!(p.summaries().unwrap().is_empty());
            assert!(p.map_for_trip(0).is_none());
        }
    }

    #[test]
    fn out_of_range_index_degrades() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [{"Stops": {"Stop": stop("A", "2024-01-01")}}]}}]}));

        assert_eq!(p.len(), 1);
        assert!(p.flatten_trip(1).is_empty());
        assert_eq!(p.stop_count(1), 0);
        assert_eq!(p.transfer_count(1), 0);
        assert_eq!(p.total_duration(1).unwrap(), TotalDuration::NoTrips);
        assert_eq!(p.summary(1).unwrap(), None);
        assert!(p.map_for_trip(1).is_none());
    }

    #[test]
    fn two_leg_trip_duration() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [
            {
                "Origin": {"date": "2024-01-01", "time": "08:00:00"},
                "Destination": {"date": "2024-01-01", "time": "08:45:00"}
            },
            {
                "Origin": {"date": "2024-01-01", "time": "08:55:00"},
                "Destination": {"date": "2024-01-01", "time": "09:30:00"}
            }
        ]}}]}));

        assert_eq!(p.total_duration(0).unwrap().to_string(), "1:30:00");
    }

    #[test]
    fn trip_without_legs_has_no_time_data() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": []}}]}));

        let total = p.total_duration(0).unwrap();
        assert_eq!(total, TotalDuration::NoTimeData);
        assert_eq!(total.to_string(), "No time data available");
    }

    #[test]
    fn malformed_timestamp_propagates() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [{
            "Origin": {"date": "01/01/2024", "time": "08:00:00"},
            "Destination": {"date": "2024-01-01", "time": "09:00:00"}
        }]}}]}));

        assert!(matches!(
            p.total_duration(0),
            Err(ItineraryError::InvalidTimestamp { .. })
        ));
        assert!(p.summaries().is_err());
    }

    #[test]
    fn mixed_stop_shapes_count_and_transfers() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [
            {"name": "Tåg 1", "Stops": {"Stop": [stop("A", "2024-01-01"), stop("B", "2024-01-01")]}},
            {"name": "Buss 2", "Stops": {"Stop": stop("B", "2024-01-01")}},
            {"name": "Buss 3", "Stops": {"Stop": [
                stop("C", "2024-01-01"), stop("D", "2024-01-01"), stop("E", "2024-01-01")
            ]}}
        ]}}]}));

        assert_eq!(p.stop_count(0), 6);
        assert_eq!(p.transfer_count(0), 2);
        assert_eq!(p.flatten_trip(0).len(), 6);
        assert_eq!(p.flatten_trip(0)[2].line, Field::Present("Buss 2".to_string()));
    }

    #[test]
    fn empty_stop_object_counts_as_no_stops() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [
            {"name": "Tåg 1", "Stops": {"Stop": {}}}
        ]}}]}));

        assert_eq!(p.stop_count(0), 0);
        assert!(p.flatten_trip(0).is_empty());
        assert!(p.map_for_trip(0).is_none());
    }

    #[test]
    fn string_coordinate_keeps_every_trip() {
        let p = planner(json!({"Trip": [
            {"LegList": {"Leg": {"Stops": {"Stop": {"name": "A", "lat": "59.33", "lon": "18.06"}}}}},
            {"LegList": {"Leg": {"Stops": {"Stop": {"name": "B", "lat": "n/a"}}}}}
        ]}));

        assert_eq!(p.len(), 2);
        assert_eq!(p.flatten_trip(0)[0].lat, Field::Present(59.33));
        assert_eq!(p.flatten_trip(1)[0].lat, Field::NotAvailable);
    }

    #[test]
    fn single_leg_has_no_transfers() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": {"name": "Tåg 1"}}}]}));
        assert_eq!(p.transfer_count(0), 0);
    }

    #[test]
    fn departure_only_stop_resolves_to_departure() {
        let p = planner(json!({"Trip": [{"LegList": {"Leg": [
            {"Stops": {"Stop": {"name": "A", "depTime": "07:15:00", "depDate": "2024-05-01"}}}
        ]}}]}));

        let records = p.flatten_trip(0);
        assert_eq!(records[0].time, Field::Present("07:15:00".to_string()));
        assert_eq!(records[0].date, Field::Present("2024-05-01".to_string()));
    }

    #[test]
    fn trips_on_keeps_matching_trips_in_order() {
        let p = planner(json!({"Trip": [
            {"LegList": {"Leg": [{"Stops": {"Stop": [stop("Y1", "2024-01-01"), stop("Y2", "2024-01-01")]}}]}},
            {"LegList": {"Leg": [{"Stops": {"Stop": [stop("T1", "2024-01-01"), stop("T2", "2024-01-02")]}}]}},
            {"LegList": {"Leg": [{"name": "no stops"}]}},
            {"LegList": {"Leg": [{"Stops": {"Stop": stop("T3", "2024-01-02")}}]}}
        ]}));

        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let today = p.trips_on(day);

        assert_eq!(today.len(), 2);
        assert_eq!(today[0].len(), 2);
        assert_eq!(today[0][0].name, Field::Present("T1".to_string()));
        assert_eq!(today[1][0].name, Field::Present("T3".to_string()));
    }

    #[test]
    fn trips_today_uses_local_date() {
        let today = Local::now().date_naive();
        let yesterday = today.pred_opt().unwrap();
        let p = planner(json!({"Trip": [
            {"LegList": {"Leg": [{"Stops": {"Stop": stop("old", &yesterday.to_string())}}]}},
            {"LegList": {"Leg": [{"Stops": {"Stop": stop("new", &today.to_string())}}]}}
        ]}));

        let trips = p.trips_today();

        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0][0].name, Field::Present("new".to_string()));
    }

    #[test]
    fn summaries_cover_every_trip() {
        let p = planner(json!({"Trip": [
            {"LegList": {"Leg": [{"Stops": {"Stop": stop("A", "2024-01-01")}}]}},
            {"LegList": {"Leg": [{}, {}]}}
        ]}));

        let summaries = p.summaries().unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].index, 0);
        assert_eq!(summaries[0].stop_count, 1);
        assert_eq!(summaries[1].transfer_count, 1);
        assert_eq!(summaries[1].total_duration, TotalDuration::NoTimeData);
    }

    struct FailingSource;

    impl TripSource for FailingSource {
        fn trips(
            &self,
            _origin: u64,
            _destination: u64,
        ) -> BoxFuture<'_, Result<TripSearchResponse, ResRobotError>> {
            futures::future::ready(Err(ResRobotError::RateLimited)).boxed()
        }
    }

    #[tokio::test]
    async fn fetch_failure_gives_empty_planner() {
        let p = TripPlanner::fetch(&FailingSource, 740000001, 740000002).await;
        assert!(p.is_empty());
    }

    #[tokio::test]
    async fn fetch_uses_source_response() {
        let response: TripSearchResponse =
            serde_json::from_value(json!({"Trip": [{}, {}, {}]})).unwrap();
        let source = MockTripSource::new(response);

        let p = TripPlanner::fetch(&source, 740000001, 740000002).await;

        assert_eq!(p.len(), 3);
    }
}
