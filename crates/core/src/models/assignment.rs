use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::availability::ProposedTime;

/// A committed (examiner, student, time window) exam booking.
///
/// Invariant: `start_time < end_time`. The id is assigned by the persistence
/// layer on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
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

/// An assignment produced by the greedy assigner but not yet persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
    pub examiner_id: Uuid,
    pub student_id: Uuid,
    pub module: String,
    pub event_id: Option<Uuid>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub meeting_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchRequest {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Exam length in minutes.
    pub duration: i64,
    pub module: String,
    pub examiner_ids: Vec<Uuid>,
    #[serde(default)]
    pub event_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatchResponse {
    pub assignments: Vec<Assignment>,
    /// Recipients that could not be notified. Never fails the request.
    pub notification_failures: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRequest {
    pub proposed_time: ProposedTime,
    pub examiner_id: Uuid,
    pub student_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleResponse {
    pub assignment: Assignment,
    pub notification_failures: Vec<String>,
}
