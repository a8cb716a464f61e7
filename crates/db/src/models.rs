use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use examsync_core::models::{Assignment, AvailabilityWindow};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAssignment {
    pub id: Uuid,
    pub examiner_id: Uuid,
    pub student_id: Uuid,
    pub module: String,
    pub event_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_link: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAvailability {
    pub id: Uuid,
    pub examiner_id: Uuid,
    pub module: String,
    pub date: NaiveDate,
    pub available_slots: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbModuleRegistration {
    pub id: Uuid,
    pub student_id: Uuid,
    pub module_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<DbAssignment> for Assignment {
    fn from(row: DbAssignment) -> Self {
        Self {
            id: row.id,
            examiner_id: row.examiner_id,
            student_id: row.student_id,
            module: row.module,
            event_id: row.event_id,
            start_time: row.start_time,
            end_time: row.end_time,
            meeting_link: row.meeting_link,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

impl From<DbAvailability> for AvailabilityWindow {
    fn from(row: DbAvailability) -> Self {
        Self {
            examiner_id: row.examiner_id,
            module: row.module,
            date: row.date,
            slots: row.available_slots,
        }
    }
}
