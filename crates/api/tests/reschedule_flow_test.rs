//! Exercises the reschedule decision flow against mocked repositories,
//! mirroring the branching in the HTTP handler without a live database.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, TimeZone, Utc};
use examsync_api::middleware::error_handling::AppError;
use examsync_core::{
    errors::ExamError,
    models::{Assignment, ProposedTime},
    scheduling::validate_reschedule,
};
use examsync_db::mock::repositories::MockAssignmentRepo;
use examsync_db::models::DbAssignment;
use uuid::Uuid;

fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, hour, minute, 0).unwrap()
}

fn db_assignment(
    id: Uuid,
    examiner_id: Uuid,
    student_id: Uuid,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> DbAssignment {
    DbAssignment {
        id,
        examiner_id,
        student_id,
        module: "CS101".to_string(),
        event_id: None,
        start_time: start,
        end_time: end,
        meeting_link: "https://meet.google.com/exam-1".to_string(),
        created_at: at(0, 0),
        updated_at: at(0, 0),
    }
}

/// The handler's lookup branch: missing target becomes NotFound.
async fn lookup_target(repo: &MockAssignmentRepo, id: Uuid) -> Result<Assignment, AppError> {
    match repo.find_assignment_by_id(id).await {
        Ok(Some(row)) => Ok(row.into()),
        Ok(None) => Err(AppError(ExamError::NotFound(format!(
            "Assignment with id {id} not found"
        )))),
        Err(err) => Err(AppError(ExamError::Persistence(err))),
    }
}

#[tokio::test]
async fn missing_target_yields_not_found() {
    let mut repo = MockAssignmentRepo::new();
    repo.expect_find_assignment_by_id().returning(|_| Ok(None));

    let err = lookup_target(&repo, Uuid::new_v4()).await.unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn conflicting_snapshot_yields_conflict_status() {
    let examiner = Uuid::new_v4();
    let student = Uuid::new_v4();

    let mut repo = MockAssignmentRepo::new();
    repo.expect_find_assignment_by_id().returning(move |id| {
        Ok(Some(db_assignment(
            id,
            examiner,
            student,
            at(9, 0),
            at(9, 30),
        )))
    });
    repo.expect_find_assignments_for_identities()
        .returning(move |_, _, _| {
            Ok(vec![db_assignment(
                Uuid::new_v4(),
                examiner,
                Uuid::new_v4(),
                at(10, 0),
                at(11, 0),
            )])
        });

    let target = lookup_target(&repo, Uuid::new_v4()).await.unwrap();
    let others: Vec<Assignment> = repo
        .find_assignments_for_identities(vec![examiner], vec![student], Some(target.id))
        .await
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();

    let proposed = ProposedTime::Instant(at(10, 0));
    let err = validate_reschedule(&target, &proposed, examiner, student, &others)
        .map_err(AppError::from)
        .unwrap_err();

    assert_eq!(err.into_response().status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn conflict_free_snapshot_passes_validation() {
    let examiner = Uuid::new_v4();
    let student = Uuid::new_v4();

    let mut repo = MockAssignmentRepo::new();
    repo.expect_find_assignment_by_id().returning(move |id| {
        Ok(Some(db_assignment(
            id,
            examiner,
            student,
            at(9, 0),
            at(9, 30),
        )))
    });
    repo.expect_find_assignments_for_identities()
        .returning(|_, _, _| Ok(Vec::new()));

    let target = lookup_target(&repo, Uuid::new_v4()).await.unwrap();
    let others: Vec<Assignment> = repo
        .find_assignments_for_identities(vec![examiner], vec![student], Some(target.id))
        .await
        .unwrap()
        .into_iter()
        .map(Into::into)
        .collect();

    let proposed = ProposedTime::Instant(at(14, 0));
    let window = validate_reschedule(&target, &proposed, examiner, student, &others).unwrap();

    assert_eq!(window.start, at(14, 0));
    assert_eq!(window.end, at(14, 30));
}
