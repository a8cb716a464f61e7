use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// The ordered student ids registered for a module. Registration order is
/// the batch processing order, so it must be stable across reads.
pub async fn find_student_ids_by_module(
    pool: &Pool<Postgres>,
    module_code: &str,
) -> Result<Vec<Uuid>> {
    tracing::debug!(module_code, "fetching module registrations");

    let student_ids = sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT student_id
        FROM module_registrations
        WHERE module_code = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(module_code)
    .fetch_all(pool)
    .await?;

    Ok(student_ids)
}
