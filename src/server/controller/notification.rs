use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa_axum::{router::OpenApiRouter, routes};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        notification::{MarkReadDto, NotificationInboxDto, NotificationReadDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notifications";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_inbox))
        .routes(routes!(mark_read))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboxQuery {
    pub unread_only: Option<String>,
}

/// Get the teacher's newest notifications and unread count.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Arguments
/// - `query` - `unreadOnly=true` restricts the items to unread ones
///
/// # Returns
/// - `200 OK` - Unread count and up to 5 notifications
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("unreadOnly" = Option<String>, Query, description = "Only unread when `true`")
    ),
    responses(
        (status = 200, description = "Inbox", body = NotificationInboxDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_inbox(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<InboxQuery>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let unread_only = query.unread_only.as_deref() == Some("true");
    let inbox = NotificationService::new(&state.db)
        .inbox(teacher.vinculo_id, unread_only)
        .await?;

    Ok((StatusCode::OK, Json(inbox)))
}

/// Mark a notification read or unread.
///
/// A missing body or `read` field marks it read.
///
/// # Access Control
/// - Authenticated teacher; only notifications addressed to the caller
///
/// # Returns
/// - `200 OK` - New read state
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - Notification not addressed to the caller
#[utoipa::path(
    patch,
    path = "/v1/api/teacher/notifications/{id}/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = Uuid, Path, description = "Notification ID")
    ),
    request_body = MarkReadDto,
    responses(
        (status = 200, description = "Read state updated", body = NotificationReadDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "Notification not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn mark_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(notification_id): Path<Uuid>,
    payload: Option<Json<MarkReadDto>>,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let read = payload.and_then(|Json(p)| p.read).unwrap_or(true);
    let result = NotificationService::new(&state.db)
        .mark_read(teacher.vinculo_id, notification_id, read, Utc::now())
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
