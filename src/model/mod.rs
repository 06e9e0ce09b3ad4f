//! Wire-level DTOs shared by every endpoint.
//!
//! Field names follow the camelCase JSON contract the school platform's clients
//! already consume; enum values stay in Spanish for the same reason.

pub mod api;
pub mod assessment;
pub mod attendance;
pub mod communication;
pub mod course;
pub mod filter;
pub mod home;
pub mod notification;
pub mod observation;
pub mod schedule;
