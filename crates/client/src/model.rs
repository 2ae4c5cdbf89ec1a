use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One alarm definition returned by the monitoring backend.
///
/// Built solely from a backend response; immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmDescriptor {
    pub name: String,
    pub state: AlarmState,
    pub region: String,
    pub state_reason: Option<String>,
    pub state_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlarmState {
    Ok,
    Alarm,
    InsufficientData,
}

impl AlarmState {
    /// Wire value the backend uses for this state.
    pub fn as_wire_str(&self) -> &'static str {
        match self {
            AlarmState::Ok => "OK",
            AlarmState::Alarm => "ALARM",
            AlarmState::InsufficientData => "INSUFFICIENT_DATA",
        }
    }
}

/// Result of a single describe-alarms query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult {
    /// Alarms in the order the backend returned them.
    pub alarms: Vec<AlarmDescriptor>,
    /// Endpoint the query was issued against, kept for diagnostics.
    pub endpoint_url: String,
    /// Count of malformed records dropped during normalization.
    pub dropped_records: usize,
}
