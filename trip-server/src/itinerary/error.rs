//! Itinerary error types.
//!
//! Absent data is never an error here; queries degrade to empty results.
//! Only data that is present but malformed is reported.

/// Errors raised while aggregating trip metrics.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ItineraryError {
    /// A leg endpoint timestamp did not match "YYYY-MM-DD HH:MM:SS"
    #[error("invalid timestamp {value:?}: {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let source = chrono::NaiveDateTime::parse_from_str("nope", "%Y").unwrap_err();
        let err = ItineraryError::InvalidTimestamp {
            value: "2024-13-01 08:00:00".into(),
            source,
        };

        assert!(
            err.to_string()
                .starts_with("invalid timestamp \"2024-13-01 08:00:00\": ")
        );
    }
}
