//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! table group. Repositories use SeaORM entity models internally and return entity or
//! read models; business rules live in the service layer. Repositories that take part
//! in multi-row writes are generic over `ConnectionTrait` so they run inside a
//! transaction as well as on the pool.

pub mod attendance;
pub mod class_session;
pub mod course;
pub mod course_subject;
pub mod enrollment;
pub mod evaluation;
pub mod grade;
pub mod notification;
pub mod observation;
pub mod schedule;
pub mod subject;
pub mod vinculo;

#[cfg(test)]
mod test;
