use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Neither the `Authentication` cookie nor a bearer header carried a token.
    #[error("Missing authentication token")]
    MissingToken,

    /// The server was started without `JWT_PUBLIC_KEY`, so no token can be verified.
    #[error("JWT public key not configured")]
    KeyNotConfigured,

    /// Signature, expiry or format check failed.
    ///
    /// The reason is only logged; clients get a fixed message.
    #[error("Invalid or expired token: {0}")]
    InvalidToken(String),

    /// Token verified but names neither a vinculo nor a person/school pair.
    #[error("Token payload must include vinculoId or personaId+colegioId")]
    MissingIdentity,

    /// Token identity fields are not UUIDs.
    #[error("Token identity is malformed: {0}")]
    MalformedIdentity(String),

    /// No vinculo links the token's person to the token's school.
    #[error("Vínculo institucional no encontrado")]
    VinculoNotFound,

    /// Authenticated teacher lacks access to the requested course or subject.
    ///
    /// # Fields
    /// - Vinculo id of the teacher
    /// - Message returned to the client
    #[error("Access denied for vinculo {0}: {1}")]
    AccessDenied(Uuid, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `KeyNotConfigured` / `InvalidToken` → 401 Unauthorized
/// - `MissingIdentity` / `MalformedIdentity` → 400 Bad Request
/// - `VinculoNotFound` → 404 Not Found
/// - `AccessDenied` → 403 Forbidden with the operation-specific message
///
/// Rejections are logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let status = match &self {
            Self::MissingToken | Self::KeyNotConfigured | Self::InvalidToken(_) => {
                StatusCode::UNAUTHORIZED
            }
            Self::MissingIdentity | Self::MalformedIdentity(_) => StatusCode::BAD_REQUEST,
            Self::VinculoNotFound => StatusCode::NOT_FOUND,
            Self::AccessDenied(..) => StatusCode::FORBIDDEN,
        };

        let message = match self {
            Self::InvalidToken(_) => "Invalid or expired token".to_string(),
            Self::MalformedIdentity(_) => "Token identity must be a valid UUID".to_string(),
            Self::AccessDenied(_, message) => message,
            other => other.to_string(),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
