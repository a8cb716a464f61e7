use chrono::Duration;
use uuid::Uuid;

use crate::errors::{ExamError, ExamResult};
use crate::models::{NewAssignment, ParsedWindow};
use crate::scheduling::conflict::{SlotClaim, has_conflict};
use crate::scheduling::filter::ExaminerWindows;

/// Meeting links are sequential placeholders, deterministic per batch.
pub const MEETING_LINK_PREFIX: &str = "https://meet.google.com/exam-";

/// Inputs to one batch assignment run. `examiners` must only contain
/// entries with at least one window, in the order produced by
/// [`FilteredAvailability::with_open_slots`](crate::scheduling::filter::FilteredAvailability::with_open_slots).
#[derive(Debug, Clone)]
pub struct BatchParams<'a> {
    pub students: &'a [Uuid],
    pub examiners: &'a [ExaminerWindows],
    pub existing: &'a [SlotClaim],
    pub duration: Duration,
    pub module: &'a str,
    pub event_id: Option<Uuid>,
}

/// Assigns every student to an examiner and a conflict-free slot, or fails
/// the whole batch.
///
/// The policy is deliberately simple and deterministic: student `i` goes to
/// `examiners[i mod N]` regardless of remaining capacity, and within that
/// examiner's windows the first conflict-free candidate of exactly
/// `duration`, advancing in `duration` steps from each window's start, is
/// committed immediately. No backtracking, no cross-examiner rebalancing: a
/// student can fail under a full examiner even when another examiner still
/// has room. Cost is O(students x windows-per-examiner).
///
/// Nothing is persisted here; on [`ExamError::NoFeasibleSlot`] the partial
/// in-memory batch is simply dropped by the caller.
pub fn assign_batch(params: &BatchParams<'_>) -> ExamResult<Vec<NewAssignment>> {
    if params.examiners.is_empty() {
        return Err(ExamError::NoExaminersWithSlots);
    }

    tracing::info!(
        students = params.students.len(),
        examiners = params.examiners.len(),
        module = params.module,
        "starting batch assignment"
    );

    let mut batch: Vec<NewAssignment> = Vec::with_capacity(params.students.len());
    let mut claims: Vec<SlotClaim> = params.existing.to_vec();

    for (index, &student_id) in params.students.iter().enumerate() {
        let examiner = &params.examiners[index % params.examiners.len()];

        let Some(window) = first_free_slot(student_id, examiner, &claims, params.duration) else {
            tracing::warn!(%student_id, examiner_id = %examiner.examiner_id, "no conflict-free slot");
            return Err(ExamError::NoFeasibleSlot(student_id));
        };

        tracing::debug!(
            %student_id,
            examiner_id = %examiner.examiner_id,
            start = %window.start,
            end = %window.end,
            "placed student"
        );

        let assignment = NewAssignment {
            examiner_id: examiner.examiner_id,
            student_id,
            module: params.module.to_string(),
            event_id: params.event_id,
            start_time: window.start,
            end_time: window.end,
            meeting_link: format!("{MEETING_LINK_PREFIX}{}", batch.len() + 1),
        };
        claims.push(SlotClaim::from(&assignment));
        batch.push(assignment);
    }

    tracing::info!(count = batch.len(), "batch assignment complete");
    Ok(batch)
}

/// First-fit slot search across one examiner's windows in order.
fn first_free_slot(
    student_id: Uuid,
    examiner: &ExaminerWindows,
    claims: &[SlotClaim],
    duration: Duration,
) -> Option<ParsedWindow> {
    for window in &examiner.windows {
        let mut candidate = window.start;
        while candidate + duration <= window.end {
            let end = candidate + duration;
            if !has_conflict(candidate, end, claims, examiner.examiner_id, student_id, None) {
                return Some(ParsedWindow {
                    start: candidate,
                    end,
                });
            }
            candidate = end;
        }
    }
    None
}
