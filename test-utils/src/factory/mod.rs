//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults and take care of the foreign key
//! chain, so a test only spells out the fields it cares about.
//!
//! # Overview
//!
//! Each entity has its own factory module with a `Factory` struct for customization
//! and/or a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // A school, teacher, course, subject and the course subject linking them
//!     let setup = factory::helpers::create_class_setup(db).await?;
//!
//!     // A student enrolled in the setup course
//!     let student = factory::helpers::create_enrolled_student(db, &setup.course).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::person::PersonFactory::new(&db)
//!     .first_name("Ana")
//!     .paternal_surname("Rojas")
//!     .build()
//!     .await?;
//!
//! let evaluation = factory::evaluation::EvaluationFactory::new(&db, course_subject.id)
//!     .kind("solemne")
//!     .build()
//!     .await?;
//! ```

pub mod attendance;
pub mod class_session;
pub mod course;
pub mod course_subject;
pub mod enrollment;
pub mod evaluation;
pub mod grade;
pub mod helpers;
pub mod notification;
pub mod observation;
pub mod person;
pub mod role;
pub mod room;
pub mod schedule;
pub mod school;
pub mod subject;
pub mod teacher_subject;
pub mod vinculo;

pub use course::create_course;
pub use course_subject::create_course_subject;
pub use enrollment::create_enrollment;
pub use grade::create_grade;
pub use school::create_school;
pub use subject::create_subject;
