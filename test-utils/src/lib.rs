//! Sage Teacher Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the teacher
//! backend. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories for the school schema and signed token fixtures.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Entity factories that insert rows with sensible defaults
//! - **fixture**: In-memory data such as RS256 key pairs and signed tokens
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_course_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_school_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let setup = factory::helpers::create_class_setup(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
