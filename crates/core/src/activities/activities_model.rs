//! Activity domain models.

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// One logged record of steps taken at a point in time.
///
/// `date` is milliseconds since the Unix epoch. Records are immutable once
/// stored; there is no update path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub steps: i64,
    pub date: i64,
}

/// Input model for inserting an activity. The engine assigns the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub steps: i64,
    pub date: i64,
}

impl NewActivity {
    pub fn new(steps: i64, date: i64) -> Self {
        Self { steps, date }
    }

    /// Builds the stored record once an id has been assigned.
    pub fn with_id(self, id: i64) -> Activity {
        Activity {
            id,
            steps: self.steps,
            date: self.date,
        }
    }
}

impl Activity {
    /// Row label for the activity list, in local time.
    pub fn formatted_date(&self) -> String {
        format_timestamp_millis(self.date, &Local)
    }
}

/// Formats epoch milliseconds as `M/D/YYYY, h:mm:ss AM` in the given zone.
///
/// Out-of-range timestamps are rendered as the raw number.
pub fn format_timestamp_millis<Tz>(millis: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match tz.timestamp_millis_opt(millis).single() {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => millis.to_string(),
    }
}

/// Id for a record added to a snapshot collection: max existing id + 1, or 1.
///
/// `None` when the max id is `i64::MAX` and no larger id exists.
pub fn next_activity_id(activities: &[Activity]) -> Option<i64> {
    match activities.iter().map(|activity| activity.id).max() {
        Some(max_id) => max_id.checked_add(1),
        None => Some(1),
    }
}
