//! HTTP handlers for the `/v1/api/teacher` surface.
//!
//! Each module authenticates the caller through `AuthGuard`, checks course or
//! subject permissions where the operation needs them, and hands off to the
//! matching service.

pub mod assessment;
pub mod attendance;
pub mod communication;
pub mod course;
pub mod evaluation;
pub mod filter;
pub mod home;
pub mod notification;
pub mod observation;
pub mod schedule;
