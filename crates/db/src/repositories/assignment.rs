use crate::models::DbAssignment;
use chrono::{DateTime, Utc};
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use examsync_core::models::NewAssignment;

/// Fetches every assignment touching any of the given examiners or
/// students, optionally excluding one assignment by id. This is the
/// snapshot the conflict detector runs against.
pub async fn find_assignments_for_identities(
    pool: &Pool<Postgres>,
    examiner_ids: &[Uuid],
    student_ids: &[Uuid],
    exclude: Option<Uuid>,
) -> Result<Vec<DbAssignment>> {
    tracing::debug!(
        examiners = examiner_ids.len(),
        students = student_ids.len(),
        ?exclude,
        "fetching assignments for identities"
    );

    let assignments = sqlx::query_as::<_, DbAssignment>(
        r#"
        SELECT id, examiner_id, student_id, module, event_id,
               start_time, end_time, meeting_link, created_at, updated_at
        FROM assignments
        WHERE (examiner_id = ANY($1) OR student_id = ANY($2))
          AND ($3::uuid IS NULL OR id <> $3)
        ORDER BY start_time ASC
        "#,
    )
    .bind(examiner_ids)
    .bind(student_ids)
    .bind(exclude)
    .fetch_all(pool)
    .await?;

    Ok(assignments)
}

/// Persists a computed batch as a single unit: every row is inserted inside
/// one transaction, so a failure leaves nothing behind.
pub async fn insert_assignments(
    pool: &Pool<Postgres>,
    assignments: &[NewAssignment],
) -> Result<Vec<DbAssignment>> {
    tracing::debug!(count = assignments.len(), "inserting assignment batch");

    let now = Utc::now();
    let mut tx = pool.begin().await?;
    let mut inserted = Vec::with_capacity(assignments.len());

    for assignment in assignments {
        let row = sqlx::query_as::<_, DbAssignment>(
            r#"
            INSERT INTO assignments
                (id, examiner_id, student_id, module, event_id,
                 start_time, end_time, meeting_link, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
            RETURNING id, examiner_id, student_id, module, event_id,
                      start_time, end_time, meeting_link, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(assignment.examiner_id)
        .bind(assignment.student_id)
        .bind(&assignment.module)
        .bind(assignment.event_id)
        .bind(assignment.start_time)
        .bind(assignment.end_time)
        .bind(&assignment.meeting_link)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        inserted.push(row);
    }

    tx.commit().await?;

    tracing::debug!(count = inserted.len(), "assignment batch committed");
    Ok(inserted)
}

pub async fn find_assignment_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbAssignment>> {
    let assignment = sqlx::query_as::<_, DbAssignment>(
        r#"
        SELECT id, examiner_id, student_id, module, event_id,
               start_time, end_time, meeting_link, created_at, updated_at
        FROM assignments
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(assignment)
}

/// Moves an assignment to a new window and identities. Returns the number
/// of modified rows; zero means the write had no effect and the caller
/// surfaces it as a persistence failure.
pub async fn update_assignment(
    pool: &Pool<Postgres>,
    id: Uuid,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    examiner_id: Uuid,
    student_id: Uuid,
) -> Result<u64> {
    tracing::debug!(%id, %start_time, %end_time, "updating assignment");

    let result = sqlx::query(
        r#"
        UPDATE assignments
        SET start_time = $2, end_time = $3, examiner_id = $4, student_id = $5,
            updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(start_time)
    .bind(end_time)
    .bind(examiner_id)
    .bind(student_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}
