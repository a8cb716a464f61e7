pub mod assignment;
pub mod availability;

pub use assignment::{
    Assignment, CreateBatchRequest, CreateBatchResponse, NewAssignment, RescheduleRequest,
    RescheduleResponse,
};
pub use availability::{AvailabilityWindow, EventWindow, ParsedWindow, ProposedTime};
