//! Request authentication and authorization.
//!
//! - `token` - Token extraction from cookies or headers and RS256 verification
//! - `auth` - `AuthGuard`, vinculo resolution and course/subject permissions

pub mod auth;
pub mod token;

#[cfg(test)]
mod test;
