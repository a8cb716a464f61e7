use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ExamError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No students registered for module {0}")]
    NoRegistrations(String),

    #[error("No examiner availability within the event dates")]
    NoAvailability,

    #[error("No examiners with available slots")]
    NoExaminersWithSlots,

    #[error("No conflict-free slot for student {0}")]
    NoFeasibleSlot(Uuid),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ExamResult<T> = Result<T, ExamError>;
