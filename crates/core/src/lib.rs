//! # ExamSync Core
//!
//! Domain models and the matching/conflict engine for the ExamSync exam
//! scheduling service. Everything in this crate is pure: the scheduling
//! components operate on snapshots of availability and existing assignments
//! supplied by the caller and never touch the database or the network
//! themselves.

pub mod errors;
pub mod models;
pub mod notify;
pub mod scheduling;
