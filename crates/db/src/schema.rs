use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create assignments table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS assignments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            examiner_id UUID NOT NULL,
            student_id UUID NOT NULL,
            module VARCHAR(255) NOT NULL,
            event_id UUID NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            meeting_link VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_time_range CHECK (end_time > start_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create examiner_availability table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS examiner_availability (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            examiner_id UUID NOT NULL,
            module VARCHAR(255) NOT NULL,
            date DATE NOT NULL,
            available_slots TEXT[] NOT NULL DEFAULT '{}',
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create module_registrations table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS module_registrations (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            student_id UUID NOT NULL,
            module_code VARCHAR(255) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized");

    Ok(())
}
