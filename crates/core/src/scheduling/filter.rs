use uuid::Uuid;

use crate::errors::ExamResult;
use crate::models::{AvailabilityWindow, EventWindow, ParsedWindow};
use crate::scheduling::time_window::parse_slot_label;

/// One examiner's usable windows, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ExaminerWindows {
    pub examiner_id: Uuid,
    pub windows: Vec<ParsedWindow>,
}

/// Availability narrowed to an event window, keyed by examiner in
/// first-seen order. An examiner whose in-range records yielded no contained
/// window still appears here with an empty list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredAvailability {
    examiners: Vec<ExaminerWindows>,
}

impl FilteredAvailability {
    /// True when no examiner had any availability record inside the event
    /// date range at all.
    pub fn is_empty(&self) -> bool {
        self.examiners.is_empty()
    }

    /// True when at least one examiner kept at least one window.
    pub fn has_open_slots(&self) -> bool {
        self.examiners.iter().any(|e| !e.windows.is_empty())
    }

    pub fn examiners(&self) -> &[ExaminerWindows] {
        &self.examiners
    }

    /// The ordered examiners that kept one or more windows; this is what the
    /// greedy assigner round-robins over.
    pub fn with_open_slots(&self) -> Vec<ExaminerWindows> {
        self.examiners
            .iter()
            .filter(|e| !e.windows.is_empty())
            .cloned()
            .collect()
    }
}

/// Narrows raw availability records to windows usable within the event.
///
/// Records dated outside `[event.start.date, event.end.date]` (inclusive)
/// are dropped entirely; slot labels of the remaining records are parsed and
/// kept only when the resulting window lies fully inside the event's
/// instant range. Slot order and first-seen examiner order are preserved,
/// with multiple in-range records of one examiner appending in record order.
pub fn filter_availability(
    records: &[AvailabilityWindow],
    event: &EventWindow,
) -> ExamResult<FilteredAvailability> {
    let mut examiners: Vec<ExaminerWindows> = Vec::new();

    for record in records {
        if !event.covers_date(record.date) {
            continue;
        }

        let mut kept = Vec::with_capacity(record.slots.len());
        for slot in &record.slots {
            let window = parse_slot_label(slot, record.date)?;
            if event.contains(&window) {
                kept.push(window);
            }
        }

        match examiners
            .iter_mut()
            .find(|e| e.examiner_id == record.examiner_id)
        {
            Some(entry) => entry.windows.extend(kept),
            None => examiners.push(ExaminerWindows {
                examiner_id: record.examiner_id,
                windows: kept,
            }),
        }
    }

    Ok(FilteredAvailability { examiners })
}
