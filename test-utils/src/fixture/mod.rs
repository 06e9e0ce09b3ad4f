//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let token = fixture::token::sign_token(&fixture::token::claims_for_vinculo(vinculo.id));
//! let verifier_key = fixture::token::PUBLIC_KEY_PEM;
//! ```

pub mod token;
