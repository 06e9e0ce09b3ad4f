//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! read models assembled at the repository boundary and parameters for write
//! operations. They are transformed to DTOs at the controller boundary.

pub mod attendance;
pub mod course_subject;
pub mod notification;
pub mod observation;
pub mod schedule;
pub mod student;
