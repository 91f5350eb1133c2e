//! Mock trip source for development without an access key.
//!
//! Loads one saved `trip` response from a JSON file and serves it for every
//! origin/destination pair.

use std::path::Path;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;

use super::error::ResRobotError;
use super::source::TripSource;
use super::types::TripSearchResponse;

/// Mock trip source that serves a fixed response.
#[derive(Debug, Clone)]
pub struct MockTripSource {
    response: Arc<TripSearchResponse>,
}

impl MockTripSource {
    /// Create a mock source serving `response`.
    pub fn new(response: TripSearchResponse) -> Self {
        Self {
            response: Arc::new(response),
        }
    }

    /// Create a mock source by loading a saved response file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ResRobotError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|source| ResRobotError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let response: TripSearchResponse =
            serde_json::from_str(&json).map_err(|e| ResRobotError::Json {
                message: format!("failed to parse {}: {}", path.display(), e),
                body: None,
            })?;

        Ok(Self::new(response))
    }

    /// Number of trips in the served response.
    pub fn trip_count(&self) -> usize {
        self.response.trips.len()
    }
}

impl TripSource for MockTripSource {
    fn trips(
        &self,
        _origin: u64,
        _destination: u64,
    ) -> BoxFuture<'_, Result<TripSearchResponse, ResRobotError>> {
        future::ready(Ok(TripSearchResponse::clone(&self.response))).boxed()
    }
}
