use crate::models::DbAvailability;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Fetches the raw availability records for a set of examiners in one
/// module. Date-range narrowing happens in the core filter so that the
/// inclusive-boundary rule lives in a single place.
pub async fn find_availability(
    pool: &Pool<Postgres>,
    examiner_ids: &[Uuid],
    module: &str,
) -> Result<Vec<DbAvailability>> {
    tracing::debug!(examiners = examiner_ids.len(), module, "fetching availability");

    let records = sqlx::query_as::<_, DbAvailability>(
        r#"
        SELECT id, examiner_id, module, date, available_slots, created_at
        FROM examiner_availability
        WHERE examiner_id = ANY($1) AND module = $2
        ORDER BY date ASC, created_at ASC
        "#,
    )
    .bind(examiner_ids)
    .bind(module)
    .fetch_all(pool)
    .await?;

    Ok(records)
}
