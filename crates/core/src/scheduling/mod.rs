//! The matching/conflict engine.
//!
//! Data flow: raw availability + event window → [`filter`] → per-examiner
//! ordered window lists → [`assigner`] (consulting [`conflict`] against
//! existing plus newly produced assignments) → batch of assignments. A
//! reschedule runs a proposed payload through [`time_window`] and
//! [`conflict`] via [`reschedule`].

pub mod assigner;
pub mod conflict;
pub mod filter;
pub mod reschedule;
pub mod time_window;

pub use assigner::{BatchParams, assign_batch};
pub use conflict::{SlotClaim, has_conflict};
pub use filter::{ExaminerWindows, FilteredAvailability, filter_availability};
pub use reschedule::{apply_reschedule, validate_reschedule};
pub use time_window::{DEFAULT_EXAM_MINUTES, parse_proposed_window, parse_slot_label};
