use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbAssignment, DbAvailability};
use examsync_core::models::NewAssignment;

// Mock repositories for testing
mock! {
    pub AssignmentRepo {
        pub async fn find_assignments_for_identities(
            &self,
            examiner_ids: Vec<Uuid>,
            student_ids: Vec<Uuid>,
            exclude: Option<Uuid>,
        ) -> eyre::Result<Vec<DbAssignment>>;

        pub async fn insert_assignments(
            &self,
            assignments: Vec<NewAssignment>,
        ) -> eyre::Result<Vec<DbAssignment>>;

        pub async fn find_assignment_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbAssignment>>;

        pub async fn update_assignment(
            &self,
            id: Uuid,
            start_time: DateTime<Utc>,
            end_time: DateTime<Utc>,
            examiner_id: Uuid,
            student_id: Uuid,
        ) -> eyre::Result<u64>;
    }
}

mock! {
    pub AvailabilityRepo {
        pub async fn find_availability(
            &self,
            examiner_ids: Vec<Uuid>,
            module: &'static str,
        ) -> eyre::Result<Vec<DbAvailability>>;
    }
}

mock! {
    pub RegistrationRepo {
        pub async fn find_student_ids_by_module(
            &self,
            module_code: &'static str,
        ) -> eyre::Result<Vec<Uuid>>;
    }
}
