use serde::Serialize;

/// One normalized arrival prediction, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arrival {
    pub line: String,
    pub destination: String,
    /// ISO 8601 UTC timestamp as received from the API.
    pub expected_time_utc: String,
    /// San Francisco local time, e.g. "03:18 PM (PDT)".
    pub expected_time_local: String,
    /// Whole minutes until arrival; negative once the prediction has passed.
    pub minutes_away: i64,
}
