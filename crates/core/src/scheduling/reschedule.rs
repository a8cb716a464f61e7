use chrono::Utc;
use uuid::Uuid;

use crate::errors::{ExamError, ExamResult};
use crate::models::{Assignment, ParsedWindow, ProposedTime};
use crate::scheduling::conflict::{SlotClaim, has_conflict};
use crate::scheduling::time_window::parse_proposed_window;

/// Validates a proposed reschedule of `target` onto the given identities.
///
/// `others` must be the assignments sharing the new examiner or the new
/// student; the target itself is excluded by id. Only the newly proposed
/// identities participate in the check, so a reschedule may hand the exam to
/// a different examiner or student entirely as long as they are free.
pub fn validate_reschedule(
    target: &Assignment,
    proposed: &ProposedTime,
    examiner_id: Uuid,
    student_id: Uuid,
    others: &[Assignment],
) -> ExamResult<ParsedWindow> {
    let window = parse_proposed_window(proposed)?;

    let claims: Vec<SlotClaim> = others.iter().map(SlotClaim::from).collect();
    if has_conflict(
        window.start,
        window.end,
        &claims,
        examiner_id,
        student_id,
        Some(target.id),
    ) {
        tracing::debug!(assignment_id = %target.id, "reschedule conflict detected");
        return Err(ExamError::Conflict(format!(
            "proposed time for assignment {} overlaps an existing assignment",
            target.id
        )));
    }

    Ok(window)
}

/// Moves `target` to the validated window and identities, refreshing its
/// modification timestamp.
pub fn apply_reschedule(
    target: &mut Assignment,
    window: ParsedWindow,
    examiner_id: Uuid,
    student_id: Uuid,
) {
    target.start_time = window.start;
    target.end_time = window.end;
    target.examiner_id = examiner_id;
    target.student_id = student_id;
    target.updated_at = Utc::now();
}
