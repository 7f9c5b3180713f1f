/// Analysis ids are time-prefixed strings (see [`crate::ids`]).
pub type AnalysisId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
