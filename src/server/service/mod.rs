//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, enrollment checks and grade arithmetic
//! - **Orchestration**: Coordinating multiple repository calls per request
//! - **Transaction Management**: Bulk attendance writes and notifications with recipients
//!
//! Services that depend on the current date take it as an argument so results are
//! reproducible in tests.

pub mod assessment;
pub mod attendance;
pub mod communication;
pub mod course;
pub mod filter;
pub mod grading;
pub mod home;
pub mod notification;
pub mod observation;
pub mod schedule;

#[cfg(test)]
mod test;
