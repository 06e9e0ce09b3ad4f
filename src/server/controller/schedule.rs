use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::{
    model::{
        api::ErrorDto,
        schedule::{ScheduleStatsDto, WeekScheduleDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::schedule::ScheduleService,
        state::AppState,
    },
};

/// Tag for grouping weekly timetable endpoints in OpenAPI documentation
pub static SCHEDULE_TAG: &str = "schedule";

/// Routes for this controller, documented through `#[utoipa::path]`.
pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_week))
        .routes(routes!(get_stats))
}

/// Get the teacher's timetable grouped Monday to Friday.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Slots per weekday, weekends dropped
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/schedule/week",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Weekly timetable", body = WeekScheduleDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_week(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let week = ScheduleService::new(&state.db).week(teacher.vinculo_id).await?;

    Ok((StatusCode::OK, Json(week)))
}

/// Get totals over the teacher's active timetable.
///
/// # Access Control
/// - Authenticated teacher
///
/// # Returns
/// - `200 OK` - Slot count, weekly hours, distinct courses and rooms
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/v1/api/teacher/schedule/stats",
    tag = SCHEDULE_TAG,
    responses(
        (status = 200, description = "Timetable totals", body = ScheduleStatsDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let teacher = AuthGuard::new(&state.db, &state.token_verifier, &headers)
        .authenticate()
        .await?;

    let stats = ScheduleService::new(&state.db).stats(teacher.vinculo_id).await?;

    Ok((StatusCode::OK, Json(stats)))
}
