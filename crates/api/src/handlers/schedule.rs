//! # Scheduling Handlers
//!
//! The two scheduling operations: batch assignment of a module's students
//! onto examiner availability, and rescheduling a single assignment.
//!
//! Both follow the same shape: validate the request, read an upfront
//! snapshot from persistence, run the pure core engine on the snapshot, and
//! perform one write. The batch insert is transactional, so a mid-batch
//! placement failure never leaves partial rows behind.

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Duration;
use eyre::Result;
use std::sync::Arc;
use uuid::Uuid;

use examsync_core::{
    errors::ExamError,
    models::{
        Assignment, AvailabilityWindow, CreateBatchRequest, CreateBatchResponse, EventWindow,
        RescheduleRequest, RescheduleResponse,
    },
    notify::NotificationSender,
    scheduling::{
        BatchParams, SlotClaim, assign_batch, filter_availability, validate_reschedule,
    },
};

use crate::{ApiState, middleware::error_handling::AppError};

/// Creates a full batch of exam assignments for one module.
///
/// # Endpoint
///
/// `POST /api/schedules/batch`
///
/// Flow: module registrations give the ordered student list; availability
/// for the requested examiners is narrowed to the event window; the greedy
/// assigner places every student or the whole batch fails; the result is
/// inserted atomically; participants are notified best-effort.
#[axum::debug_handler]
pub async fn create_batch(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateBatchRequest>,
) -> Result<Json<CreateBatchResponse>, AppError> {
    let duration = validate_batch_request(&payload)?;

    // Student order is registration order; it fixes the round-robin.
    let student_ids =
        examsync_db::repositories::registration::find_student_ids_by_module(
            &state.db_pool,
            &payload.module,
        )
        .await
        .map_err(ExamError::Persistence)?;
    if student_ids.is_empty() {
        return Err(ExamError::NoRegistrations(payload.module.clone()).into());
    }

    let records = examsync_db::repositories::availability::find_availability(
        &state.db_pool,
        &payload.examiner_ids,
        &payload.module,
    )
    .await
    .map_err(ExamError::Persistence)?;
    let records: Vec<AvailabilityWindow> = records.into_iter().map(Into::into).collect();

    let event = EventWindow {
        start: payload.start_date,
        end: payload.end_date,
    };
    let filtered = filter_availability(&records, &event)?;
    if filtered.is_empty() {
        return Err(ExamError::NoAvailability.into());
    }
    if !filtered.has_open_slots() {
        return Err(ExamError::NoExaminersWithSlots.into());
    }
    let examiners = filtered.with_open_slots();

    // Snapshot of every assignment that could collide with this batch.
    let existing = examsync_db::repositories::assignment::find_assignments_for_identities(
        &state.db_pool,
        &payload.examiner_ids,
        &student_ids,
        None,
    )
    .await
    .map_err(ExamError::Persistence)?;
    let existing: Vec<Assignment> = existing.into_iter().map(Into::into).collect();
    let claims: Vec<SlotClaim> = existing.iter().map(SlotClaim::from).collect();

    let batch = assign_batch(&BatchParams {
        students: &student_ids,
        examiners: &examiners,
        existing: &claims,
        duration,
        module: &payload.module,
        event_id: payload.event_id,
    })?;

    let inserted = examsync_db::repositories::assignment::insert_assignments(
        &state.db_pool,
        &batch,
    )
    .await
    .map_err(ExamError::Persistence)?;
    let assignments: Vec<Assignment> = inserted.into_iter().map(Into::into).collect();

    let notification_failures =
        notify_participants(state.notifier.as_ref(), &assignments, "Exam scheduled").await;

    Ok(Json(CreateBatchResponse {
        assignments,
        notification_failures,
    }))
}

/// Moves one assignment to a proposed time and (possibly new) identities.
///
/// # Endpoint
///
/// `PUT /api/schedules/:id/reschedule`
///
/// The conflict check runs against the other assignments of the newly
/// proposed examiner and student only; on conflict the stored assignment is
/// left untouched. The check and the update are two separate operations
/// with no atomicity guarantee between them.
#[axum::debug_handler]
pub async fn reschedule(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RescheduleRequest>,
) -> Result<Json<RescheduleResponse>, AppError> {
    let target: Assignment =
        examsync_db::repositories::assignment::find_assignment_by_id(&state.db_pool, id)
            .await
            .map_err(ExamError::Persistence)?
            .ok_or_else(|| ExamError::NotFound(format!("Assignment with id {id} not found")))?
            .into();

    let others = examsync_db::repositories::assignment::find_assignments_for_identities(
        &state.db_pool,
        &[payload.examiner_id],
        &[payload.student_id],
        Some(id),
    )
    .await
    .map_err(ExamError::Persistence)?;
    let others: Vec<Assignment> = others.into_iter().map(Into::into).collect();

    let window = validate_reschedule(
        &target,
        &payload.proposed_time,
        payload.examiner_id,
        payload.student_id,
        &others,
    )?;

    let modified = examsync_db::repositories::assignment::update_assignment(
        &state.db_pool,
        id,
        window.start,
        window.end,
        payload.examiner_id,
        payload.student_id,
    )
    .await
    .map_err(ExamError::Persistence)?;
    if modified == 0 {
        return Err(ExamError::Persistence(eyre::eyre!(
            "update of assignment {id} reported no modified rows"
        ))
        .into());
    }

    let assignment: Assignment =
        examsync_db::repositories::assignment::find_assignment_by_id(&state.db_pool, id)
            .await
            .map_err(ExamError::Persistence)?
            .ok_or_else(|| ExamError::NotFound(format!("Assignment with id {id} not found")))?
            .into();

    let notification_failures = notify_participants(
        state.notifier.as_ref(),
        std::slice::from_ref(&assignment),
        "Exam rescheduled",
    )
    .await;

    Ok(Json(RescheduleResponse {
        assignment,
        notification_failures,
    }))
}

/// Fetches a single assignment by id.
///
/// # Endpoint
///
/// `GET /api/schedules/:id`
#[axum::debug_handler]
pub async fn get_assignment(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Assignment>, AppError> {
    let assignment: Assignment =
        examsync_db::repositories::assignment::find_assignment_by_id(&state.db_pool, id)
            .await
            .map_err(ExamError::Persistence)?
            .ok_or_else(|| ExamError::NotFound(format!("Assignment with id {id} not found")))?
            .into();

    Ok(Json(assignment))
}

/// Rejects malformed batch requests before any lookup and resolves the exam
/// length into a checked [`Duration`].
fn validate_batch_request(payload: &CreateBatchRequest) -> Result<Duration, AppError> {
    if payload.start_date >= payload.end_date {
        return Err(ExamError::InvalidInput(
            "startDate must be before endDate".to_string(),
        )
        .into());
    }
    if payload.duration < 1 {
        return Err(ExamError::InvalidInput(format!(
            "duration must be at least 1 minute, got {}",
            payload.duration
        ))
        .into());
    }
    let Some(duration) = Duration::try_minutes(payload.duration) else {
        return Err(ExamError::InvalidInput(format!(
            "duration of {} minutes is out of range",
            payload.duration
        ))
        .into());
    };
    if payload.module.trim().is_empty() {
        return Err(ExamError::InvalidInput("module must not be empty".to_string()).into());
    }
    if payload.examiner_ids.is_empty() {
        return Err(
            ExamError::InvalidInput("examinerIds must not be empty".to_string()).into(),
        );
    }
    Ok(duration)
}

/// Notifies the examiner and student of each assignment, best-effort.
/// Returns the recipients that could not be reached.
async fn notify_participants(
    notifier: &dyn NotificationSender,
    assignments: &[Assignment],
    subject: &str,
) -> Vec<String> {
    let mut failures = Vec::new();

    for assignment in assignments {
        let body = format!(
            "Module {}: exam from {} to {}. Meeting link: {}",
            assignment.module,
            assignment.start_time,
            assignment.end_time,
            assignment.meeting_link
        );
        for recipient in [
            format!("examiner:{}", assignment.examiner_id),
            format!("student:{}", assignment.student_id),
        ] {
            if !notifier.send(&recipient, subject, &body).await {
                tracing::warn!(%recipient, "notification delivery failed");
                failures.push(recipient);
            }
        }
    }

    failures
}
