//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Milliseconds since the Unix epoch.
    pub fn as_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

/// Wall-clock stamp embedded in generated file names: `YYYYMMDDHHMMSS`.
///
/// Always 14 ASCII digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp(NaiveDateTime);

impl FileStamp {
    /// Stamp for the current local time.
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    pub fn from_naive(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl std::fmt::Display for FileStamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d%H%M%S"))
    }
}
