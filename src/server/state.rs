//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Token verifier holding the RS256 public key

use sea_orm::DatabaseConnection;

use crate::server::middleware::token::TokenVerifier;

/// Application state containing shared resources and dependencies.
///
/// Cloned for every request. `DatabaseConnection` is a pool handle and
/// `TokenVerifier` shares its decoding key, so clones are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Verifies bearer and cookie tokens issued by the platform's identity service.
    ///
    /// Holds no key when `JWT_PUBLIC_KEY` is unset, in which case every
    /// authenticated request fails with 401.
    pub token_verifier: TokenVerifier,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `token_verifier` - Token verifier built from configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, token_verifier: TokenVerifier) -> Self {
        Self { db, token_verifier }
    }
}
