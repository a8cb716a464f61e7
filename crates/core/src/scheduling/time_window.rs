use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::errors::{ExamError, ExamResult};
use crate::models::{ParsedWindow, ProposedTime};

/// Default exam length applied when a proposed time carries no end.
pub const DEFAULT_EXAM_MINUTES: i64 = 30;

/// Parses a 12-hour slot label like `"9:00AM-10:00AM"` against a date into
/// an absolute UTC window.
pub fn parse_slot_label(label: &str, date: NaiveDate) -> ExamResult<ParsedWindow> {
    let (start_raw, end_raw) = label.split_once('-').ok_or_else(|| {
        ExamError::InvalidInput(format!("slot label '{label}' is missing the '-' separator"))
    })?;

    let start = clock_time(start_raw.trim())?;
    let end = clock_time(end_raw.trim())?;

    Ok(ParsedWindow {
        start: date.and_time(start).and_utc(),
        end: date.and_time(end).and_utc(),
    })
}

/// Parses one side of a slot label, e.g. `"12:30PM"`, into a 24-hour time.
fn clock_time(text: &str) -> ExamResult<NaiveTime> {
    let (digits, is_pm) = if let Some(rest) = text.strip_suffix("AM") {
        (rest.trim(), false)
    } else if let Some(rest) = text.strip_suffix("PM") {
        (rest.trim(), true)
    } else {
        return Err(ExamError::InvalidInput(format!(
            "time '{text}' is missing an AM/PM marker"
        )));
    };

    let (hour_raw, minute_raw) = digits.split_once(':').ok_or_else(|| {
        ExamError::InvalidInput(format!("time '{text}' is missing the ':' separator"))
    })?;

    let hour: u32 = hour_raw
        .trim()
        .parse()
        .map_err(|_| ExamError::InvalidInput(format!("non-numeric hour in '{text}'")))?;
    let minute: u32 = minute_raw
        .trim()
        .parse()
        .map_err(|_| ExamError::InvalidInput(format!("non-numeric minute in '{text}'")))?;

    // 12-hour to 24-hour: 12AM is midnight, PM adds twelve except at noon.
    let hour = match (is_pm, hour) {
        (false, 12) => 0,
        (true, h) if h != 12 => h + 12,
        (_, h) => h,
    };

    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ExamError::InvalidInput(format!("time '{text}' is out of range")))
}

/// Resolves a proposed-time payload into an absolute UTC window.
///
/// A bare instant gets the default exam length; a date-and-times shape
/// accepts 24-hour `HH:MM` values or full timestamps whose time-of-day is
/// taken, with the end defaulting to start plus the default length when
/// absent or empty.
pub fn parse_proposed_window(proposed: &ProposedTime) -> ExamResult<ParsedWindow> {
    match proposed {
        ProposedTime::Instant(start) => Ok(ParsedWindow {
            start: *start,
            end: *start + Duration::minutes(DEFAULT_EXAM_MINUTES),
        }),
        ProposedTime::DateAndTimes {
            date,
            start_time,
            end_time,
        } => {
            let date = date.date_naive();
            let start = date.and_time(time_of_day(start_time)?).and_utc();
            let end = match end_time.as_deref().filter(|s| !s.is_empty()) {
                Some(raw) => date.and_time(time_of_day(raw)?).and_utc(),
                None => start + Duration::minutes(DEFAULT_EXAM_MINUTES),
            };
            Ok(ParsedWindow { start, end })
        }
    }
}

fn time_of_day(text: &str) -> ExamResult<NaiveTime> {
    if let Ok(time) = NaiveTime::parse_from_str(text, "%H:%M") {
        return Ok(time);
    }
    if let Ok(instant) = text.parse::<DateTime<Utc>>() {
        return Ok(instant.time());
    }
    // Timestamps without an offset come from clients that never attach one.
    text.parse::<NaiveDateTime>()
        .map(|naive| naive.time())
        .map_err(|_| ExamError::InvalidInput(format!("unsupported time value '{text}'")))
}
