use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{Datelike, Local, Utc};
use serde::Deserialize;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        communication::{CommunicationSentDto, SendCommunicationDto, SentCommunicationListDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        service::communication::CommunicationService, state::AppState,
    },
};

/// Tag for grouping teacher communication endpoints in OpenAPI documentation
pub static COMMUNICATION_TAG: &str = "communication";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(send, get_sent))
}

#[derive(Deserialize)]
pub struct SentQuery {
    pub limit: Option<String>,
}

/// Send a communication to a course, a student, a colleague or an administrator.
///
/// Recipients are the course's students enrolled this year plus every explicit
/// id, without duplicates.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `201 Created` - Notification id and recipient count
/// - `400 Bad Request` - Missing subject or no recipients
/// - `404 Not Found` - Sender vinculo not found
#[utoipa::path(
    post,
    path = "/v1/api/teacher/communication",
    tag = COMMUNICATION_TAG,
    request_body = SendCommunicationDto,
    responses(
        (status = 201, description = "Communication sent", body = CommunicationSentDto),
        (status = 400, description = "Missing subject or no recipients", body = ErrorDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Sender not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn send(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SendCommunicationDto>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let sent = CommunicationService::new(&state.db)
        .send(teacher.vinculo_id, payload, Local::now().year(), Utc::now())
        .await?;

    Ok((StatusCode::CREATED, Json(sent)))
}

/// Get communications the teacher sent with their read progress.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Arguments
/// - `query` - Optional `limit`; non-numeric or non-positive values are ignored
///
/// # Returns
/// - `200 OK` - Sent communications newest first
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/communication",
    tag = COMMUNICATION_TAG,
    params(
        ("limit" = Option<String>, Query, description = "Maximum items to return")
    ),
    responses(
        (status = 200, description = "Sent communications", body = SentCommunicationListDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sent(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let limit = query.limit.as_deref().and_then(|l| l.trim().parse::<i64>().ok());
    let sent = CommunicationService::new(&state.db)
        .sent(teacher.vinculo_id, limit)
        .await?;

    Ok((StatusCode::OK, Json(sent)))
}
