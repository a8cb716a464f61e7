use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Assignment, NewAssignment};

/// A lightweight view of a booked slot, buildable from both persisted and
/// not-yet-persisted assignments, used by the conflict predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotClaim {
    pub assignment_id: Option<Uuid>,
    pub examiner_id: Uuid,
    pub student_id: Uuid,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&Assignment> for SlotClaim {
    fn from(assignment: &Assignment) -> Self {
        Self {
            assignment_id: Some(assignment.id),
            examiner_id: assignment.examiner_id,
            student_id: assignment.student_id,
            start: assignment.start_time,
            end: assignment.end_time,
        }
    }
}

impl From<&NewAssignment> for SlotClaim {
    fn from(assignment: &NewAssignment) -> Self {
        Self {
            assignment_id: None,
            examiner_id: assignment.examiner_id,
            student_id: assignment.student_id,
            start: assignment.start_time,
            end: assignment.end_time,
        }
    }
}

/// True when some non-excluded claim shares the examiner or the student and
/// its `[start, end)` window overlaps the candidate (half-open test:
/// `start < claim.end && end > claim.start`).
///
/// A window that never shares an id trivially never conflicts, regardless of
/// time overlap. This one predicate enforces both "one examiner, one exam at
/// a time" and "one student, one exam at a time".
pub fn has_conflict(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    claims: &[SlotClaim],
    examiner_id: Uuid,
    student_id: Uuid,
    exclude: Option<Uuid>,
) -> bool {
    claims.iter().any(|claim| {
        if let (Some(id), Some(skip)) = (claim.assignment_id, exclude) {
            if id == skip {
                return false;
            }
        }
        let identity = claim.examiner_id == examiner_id || claim.student_id == student_id;
        let overlap = start < claim.end && end > claim.start;
        identity && overlap
    })
}
