use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One examiner's declared availability for a module on a given date.
///
/// Slots are raw 12-hour labels such as `"9:00AM-10:00AM"`; they are parsed
/// into absolute windows by the time window parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityWindow {
    pub examiner_id: Uuid,
    pub module: String,
    pub date: NaiveDate,
    pub slots: Vec<String>,
}

/// The date range bounding a scheduling campaign. All produced assignment
/// windows must lie within `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// Inclusive date-level check used when narrowing availability records.
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        self.start.date_naive() <= date && date <= self.end.date_naive()
    }

    /// Inclusive instant-level containment of a parsed window.
    pub fn contains(&self, window: &ParsedWindow) -> bool {
        self.start <= window.start && window.end <= self.end
    }
}

/// An absolute `[start, end)` instant pair derived from a slot label or a
/// proposed-time payload. Never persisted directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// The two accepted shapes of a proposed reschedule time, decided at the
/// deserialization boundary.
///
/// A bare RFC 3339 timestamp becomes [`ProposedTime::Instant`]; an object
/// with `date` (a timestamp or a bare `YYYY-MM-DD`) and `startTime`
/// (optionally `endTime`) becomes [`ProposedTime::DateAndTimes`]. Anything
/// else is rejected by serde.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProposedTime {
    Instant(DateTime<Utc>),
    #[serde(rename_all = "camelCase")]
    DateAndTimes {
        #[serde(deserialize_with = "lenient_date")]
        date: DateTime<Utc>,
        start_time: String,
        #[serde(default)]
        end_time: Option<String>,
    },
}

/// Clients send `date` as an RFC 3339 timestamp, a naive timestamp, or a
/// bare `YYYY-MM-DD` from a date picker. All three resolve to a UTC instant,
/// bare dates at midnight.
fn lenient_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(instant) = raw.parse::<DateTime<Utc>>() {
        return Ok(instant);
    }
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Ok(naive.and_utc());
    }
    raw.parse::<NaiveDate>()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| serde::de::Error::custom(format!("unsupported date value '{raw}'")))
}
